//! Query engine.
//!
//! All queries are read-only and deterministic for a given [Dataset], so a single
//! [QueryEngine] may be shared freely between concurrent request handlers.

use crate::dataset::Dataset;
use crate::error::EnergyError;
use crate::models::{CountryEnergy, EnergyAverages, NumericField};

use hashbrown::HashSet;

/// Answers queries against an immutable dataset.
#[derive(Debug, Default)]
pub struct QueryEngine {
    dataset: Dataset,
}

impl QueryEngine {
    /// Returns a new QueryEngine that owns `dataset`.
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }

    /// Names of all countries, in dataset order.
    pub fn country_names(&self) -> Vec<String> {
        self.dataset
            .records()
            .iter()
            .map(|record| record.country.clone())
            .collect()
    }

    /// Energy breakdown of the first record whose country is `country`.
    pub fn country_energy(&self, country: &str) -> Result<CountryEnergy, EnergyError> {
        self.dataset
            .records()
            .iter()
            .find(|record| record.country == country)
            .map(CountryEnergy::from)
            .ok_or_else(|| EnergyError::CountryNotFound {
                country: country.to_string(),
            })
    }

    /// Values of `field` for every record, in dataset order.
    pub fn field_values(&self, field: NumericField) -> Vec<f64> {
        self.dataset
            .records()
            .iter()
            .map(|record| field.value(record))
            .collect()
    }

    /// Distinct regions, in order of first appearance.
    pub fn regions(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.dataset
            .records()
            .iter()
            .filter(|record| seen.insert(record.region.as_str()))
            .map(|record| record.region.clone())
            .collect()
    }

    /// Names of the countries in `region`, in dataset order.
    ///
    /// An unknown region yields an empty list.
    pub fn countries_in_region(&self, region: &str) -> Vec<String> {
        self.dataset
            .records()
            .iter()
            .filter(|record| record.region == region)
            .map(|record| record.country.clone())
            .collect()
    }

    /// Mean of each numeric field over all records.
    ///
    /// Missing values were loaded as zero and count towards the denominator.
    pub fn averages(&self) -> Result<EnergyAverages, EnergyError> {
        if self.dataset.is_empty() {
            return Err(EnergyError::NoData);
        }
        let count = self.dataset.len() as f64;
        let sum = |field: NumericField| -> f64 {
            self.dataset
                .records()
                .iter()
                .map(|record| field.value(record))
                .sum()
        };
        Ok(EnergyAverages {
            avg_renewable: sum(NumericField::TotalRenewable) / count,
            avg_non_renewable: sum(NumericField::TotalNonRenewable) / count,
            avg_total_energy: sum(NumericField::TotalEnergy) / count,
        })
    }
}
