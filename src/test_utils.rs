use crate::dataset::Dataset;
use crate::models::CountryRecord;

/// Create a Dataset spanning several regions.
pub(crate) fn get_test_dataset() -> Dataset {
    Dataset::from_records(vec![
        CountryRecord::new("Norway", "Europe", 90.0, 10.0, 100.0),
        CountryRecord::new("Kenya", "Africa", 7.5, 2.5, 10.0),
        CountryRecord::new("Sweden", "Europe", 60.0, 40.0, 100.0),
        CountryRecord::new("Brazil", "Americas", 45.0, 55.0, 100.0),
        CountryRecord::new("Egypt", "Africa", 0.0, 80.0, 80.0),
    ])
}

/// Create the two-country Dataset with known averages of 5, 2.5 and 7.5.
pub(crate) fn get_scenario_dataset() -> Dataset {
    Dataset::from_records(vec![
        CountryRecord::new("A", "X", 10.0, 5.0, 15.0),
        CountryRecord::new("B", "X", 0.0, 0.0, 0.0),
    ])
}
