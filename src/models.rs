//! Data types and associated functions and methods

use serde::Serialize;
use strum_macros::{Display, IntoStaticStr};

/// Energy statistics for a single country, as held in the dataset.
///
/// The source file uses string keys containing spaces and hyphens. These are mapped onto typed
/// fields by the loader, once, so that nothing downstream of it deals with raw keys.
#[derive(Clone, Debug, PartialEq)]
pub struct CountryRecord {
    /// Country name, used as the lookup key
    pub country: String,
    /// Region the country belongs to
    pub region: String,
    /// Total renewable energy
    pub total_renewable: f64,
    /// Total non-renewable energy
    pub total_non_renewable: f64,
    /// Total energy
    pub total_energy: f64,
}

impl CountryRecord {
    /// Key of the country name in the source file.
    pub const COUNTRY_KEY: &'static str = "Country";
    /// Key of the region in the source file.
    pub const REGION_KEY: &'static str = "Region";

    /// Return a new CountryRecord object.
    pub fn new(
        country: &str,
        region: &str,
        total_renewable: f64,
        total_non_renewable: f64,
        total_energy: f64,
    ) -> Self {
        CountryRecord {
            country: country.to_string(),
            region: region.to_string(),
            total_renewable,
            total_non_renewable,
            total_energy,
        }
    }
}

/// Numeric fields of a [CountryRecord] that may be listed across the whole dataset.
///
/// Converting a field into a `&'static str` gives its key in the source file.
#[derive(Clone, Copy, Debug, Display, IntoStaticStr, PartialEq)]
pub enum NumericField {
    #[strum(serialize = "Total Renewable")]
    TotalRenewable,
    #[strum(serialize = "Total Non-Renewable")]
    TotalNonRenewable,
    #[strum(serialize = "Total Energy")]
    TotalEnergy,
}

impl NumericField {
    /// Every field, in source file order.
    pub const ALL: [NumericField; 3] = [
        Self::TotalRenewable,
        Self::TotalNonRenewable,
        Self::TotalEnergy,
    ];

    /// Key of this field in the source file.
    pub fn key(self) -> &'static str {
        self.into()
    }

    /// Returns the value of this field in a record.
    pub fn value(self, record: &CountryRecord) -> f64 {
        match self {
            Self::TotalRenewable => record.total_renewable,
            Self::TotalNonRenewable => record.total_non_renewable,
            Self::TotalEnergy => record.total_energy,
        }
    }
}

/// Energy breakdown for a single country.
///
/// Values are `f64`, so whole numbers serialise with a fractional part (`10` becomes `10.0`).
/// Both spellings denote the same JSON number.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CountryEnergy {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "TotalRenewable")]
    pub total_renewable: f64,
    #[serde(rename = "TotalNonRenewable")]
    pub total_non_renewable: f64,
    #[serde(rename = "TotalEnergy")]
    pub total_energy: f64,
}

impl From<&CountryRecord> for CountryEnergy {
    fn from(record: &CountryRecord) -> Self {
        CountryEnergy {
            country: record.country.clone(),
            total_renewable: record.total_renewable,
            total_non_renewable: record.total_non_renewable,
            total_energy: record.total_energy,
        }
    }
}

/// Per-country averages of each numeric field across the dataset.
///
/// As with [CountryEnergy], whole values serialise as `f64` (`5.0`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EnergyAverages {
    #[serde(rename = "AverageTotalRenewable")]
    pub avg_renewable: f64,
    #[serde(rename = "AverageTotalNonRenewable")]
    pub avg_non_renewable: f64,
    #[serde(rename = "AverageTotalEnergy")]
    pub avg_total_energy: f64,
}
