//! Dataset loading.
//!
//! The dataset is read once at startup from a JSON array of country objects and is never modified
//! afterwards. A failed load is not fatal: the server carries on with an empty dataset.
//!
//! Only a file that is not a JSON array fails to load. Individual entries are mapped leniently:
//! an entry without a string `Country` is skipped, a missing `Region` becomes an empty string and
//! numeric fields that are absent, null or not numbers become zero.

use crate::error::{log_error_chain, EnergyError};
use crate::models::{CountryRecord, NumericField};

use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Immutable, ordered sequence of country records.
///
/// Record order is the order of the source file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dataset {
    records: Vec<CountryRecord>,
}

impl Dataset {
    /// Return a Dataset containing the given records, in order.
    pub fn from_records(records: Vec<CountryRecord>) -> Self {
        Self { records }
    }

    /// Load a dataset from a file, falling back to an empty dataset on failure.
    ///
    /// Emits a single log event describing the outcome.
    ///
    /// # Arguments
    ///
    /// * `path`: Path to a JSON file containing an array of country objects
    pub fn load(path: impl AsRef<Path>) -> Self {
        match Self::try_load(path.as_ref()) {
            Ok(dataset) => {
                tracing::info!(
                    "Energy data loaded successfully: {} records from {}",
                    dataset.len(),
                    path.as_ref().display()
                );
                dataset
            }
            Err(error) => {
                log_error_chain(&error);
                Self::default()
            }
        }
    }

    /// Load a dataset from a file.
    ///
    /// # Arguments
    ///
    /// * `path`: Path to a JSON file containing an array of country objects
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, EnergyError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| EnergyError::DatasetRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file)).map_err(|source| EnergyError::DatasetParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a dataset from a reader yielding a JSON array of country objects.
    ///
    /// Fails only if the input is not a JSON array. Entries that cannot be used are skipped with
    /// a warning.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        let entries: Vec<Value> = serde_json::from_reader(reader)?;
        let records = entries
            .iter()
            .enumerate()
            .filter_map(|(index, entry)| map_entry(index, entry))
            .collect();
        Ok(Self::from_records(records))
    }

    /// Returns the records in dataset order.
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    /// Returns the number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Map one entry of the source array onto a [CountryRecord].
///
/// Returns `None` if the entry has no string `Country`.
fn map_entry(index: usize, entry: &Value) -> Option<CountryRecord> {
    let country = match entry.get(CountryRecord::COUNTRY_KEY) {
        Some(Value::String(country)) => country,
        _ => {
            tracing::warn!(
                "Skipping dataset entry {}: no string \"{}\" field",
                index,
                CountryRecord::COUNTRY_KEY
            );
            return None;
        }
    };

    let region = match entry.get(CountryRecord::REGION_KEY) {
        Some(Value::String(region)) => region.as_str(),
        other => {
            tracing::warn!(
                "Dataset entry {} ({}): \"{}\" is {:?}, using an empty region",
                index,
                country,
                CountryRecord::REGION_KEY,
                other
            );
            ""
        }
    };

    let [total_renewable, total_non_renewable, total_energy] =
        NumericField::ALL.map(|field| numeric_value(index, country, field, entry));

    Some(CountryRecord::new(
        country,
        region,
        total_renewable,
        total_non_renewable,
        total_energy,
    ))
}

/// Read a numeric field of an entry. Absent and null values are zero without comment.
fn numeric_value(index: usize, country: &str, field: NumericField, entry: &Value) -> f64 {
    match entry.get(field.key()) {
        None | Some(Value::Null) => 0.0,
        Some(Value::Number(number)) => number.as_f64().unwrap_or_default(),
        Some(other) => {
            tracing::warn!(
                "Dataset entry {} ({}): \"{}\" is not a number ({}), using 0",
                index,
                country,
                field,
                other
            );
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    // Write `contents` to a uniquely named file in the system temp dir.
    fn write_temp_file(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "energy-stats-{}-{}.json",
            name,
            std::process::id()
        ));
        let mut file = File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn from_reader_preserves_order() {
        let json = r#"[
            {"Country": "B", "Region": "X", "Total Renewable": 1, "Total Non-Renewable": 2, "Total Energy": 3},
            {"Country": "A", "Region": "Y", "Total Renewable": 4, "Total Non-Renewable": 5, "Total Energy": 9}
        ]"#;
        let dataset = Dataset::from_reader(json.as_bytes()).unwrap();
        assert_eq!(2, dataset.len());
        assert_eq!(
            &[
                CountryRecord::new("B", "X", 1.0, 2.0, 3.0),
                CountryRecord::new("A", "Y", 4.0, 5.0, 9.0),
            ],
            dataset.records()
        );
    }

    #[test]
    fn from_reader_missing_numbers_are_zero() {
        let json = r#"[{"Country": "A", "Region": "X", "Total Energy": null}]"#;
        let dataset = Dataset::from_reader(json.as_bytes()).unwrap();
        assert_eq!(
            &[CountryRecord::new("A", "X", 0.0, 0.0, 0.0)],
            dataset.records()
        );
    }

    #[test]
    fn from_reader_keeps_record_without_region() {
        let json = r#"[
            {"Country": "A", "Region": "X", "Total Renewable": 10, "Total Non-Renewable": 5, "Total Energy": 15},
            {"Country": "B", "Total Renewable": 1}
        ]"#;
        let dataset = Dataset::from_reader(json.as_bytes()).unwrap();
        assert_eq!(
            &[
                CountryRecord::new("A", "X", 10.0, 5.0, 15.0),
                CountryRecord::new("B", "", 1.0, 0.0, 0.0),
            ],
            dataset.records()
        );
    }

    #[test]
    fn from_reader_non_numeric_values_are_zero() {
        let json = r#"[
            {"Country": "A", "Region": "X", "Total Renewable": "12", "Total Non-Renewable": true,
             "Total Energy": 4}
        ]"#;
        let dataset = Dataset::from_reader(json.as_bytes()).unwrap();
        assert_eq!(
            &[CountryRecord::new("A", "X", 0.0, 0.0, 4.0)],
            dataset.records()
        );
    }

    #[test]
    fn from_reader_non_string_region_is_empty() {
        let json = r#"[{"Country": "A", "Region": 3, "Total Energy": 1}]"#;
        let dataset = Dataset::from_reader(json.as_bytes()).unwrap();
        assert_eq!(
            &[CountryRecord::new("A", "", 0.0, 0.0, 1.0)],
            dataset.records()
        );
    }

    #[test]
    fn from_reader_skips_entries_without_country() {
        let json = r#"[
            {"Region": "X", "Total Energy": 1},
            {"Country": 7, "Region": "X"},
            "not an object",
            {"Country": "C", "Region": "Y", "Total Energy": 2}
        ]"#;
        let dataset = Dataset::from_reader(json.as_bytes()).unwrap();
        assert_eq!(
            &[CountryRecord::new("C", "Y", 0.0, 0.0, 2.0)],
            dataset.records()
        );
    }

    #[test]
    fn from_reader_empty_array() {
        let dataset = Dataset::from_reader("[]".as_bytes()).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn from_reader_not_an_array() {
        assert!(Dataset::from_reader(r#"{"Country": "A"}"#.as_bytes()).is_err());
    }

    #[test]
    fn try_load_file() {
        let path = write_temp_file(
            "try-load",
            r#"[{"Country": "A", "Region": "X", "Total Renewable": 10,
                "Total Non-Renewable": 5, "Total Energy": 15}]"#,
        );
        let dataset = Dataset::try_load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(
            &[CountryRecord::new("A", "X", 10.0, 5.0, 15.0)],
            dataset.records()
        );
    }

    #[test]
    fn try_load_missing_file() {
        let error = Dataset::try_load("/nonexistent/energy.json").unwrap_err();
        assert!(
            matches!(error, EnergyError::DatasetRead { .. }),
            "error: {error:?}"
        );
    }

    #[test]
    fn try_load_malformed_file() {
        let path = write_temp_file("malformed", "[{\"Country\": ");
        let error = Dataset::try_load(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(
            matches!(error, EnergyError::DatasetParse { .. }),
            "error: {error:?}"
        );
    }

    #[test]
    fn load_failure_gives_empty_dataset() {
        let dataset = Dataset::load("/nonexistent/energy.json");
        assert_eq!(Dataset::default(), dataset);
    }
}
