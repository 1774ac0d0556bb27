use std::collections::HashMap;
use std::path::Path;

use demoscope_types::{Country, CountryDocument};

use crate::Result;

/// Immutable snapshot of the tracked-country records, held for the whole
/// session. Fetched once at startup; no record is ever mutated.
#[derive(Debug, Default)]
pub struct DatasetStore {
    countries: Vec<Country>,
    by_name: HashMap<String, usize>,
}

impl DatasetStore {
    pub fn new(countries: Vec<Country>) -> Self {
        // `name` is the sole join key. The source is consumed as-is, so a
        // duplicate name keeps its first record rather than erroring.
        let mut by_name = HashMap::new();
        for (idx, country) in countries.iter().enumerate() {
            by_name.entry(country.name.clone()).or_insert(idx);
        }
        Self { countries, by_name }
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn get(&self, name: &str) -> Option<&Country> {
        self.by_name.get(name).map(|&idx| &self.countries[idx])
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

/// Load the dataset document from disk.
///
/// IO and parse failures are surfaced distinctly; there is no retry here.
/// The session is unusable without a dataset, and the caller renders the
/// failure inline.
pub fn load_dataset(path: &Path) -> Result<DatasetStore> {
    let content = std::fs::read_to_string(path)?;
    let document: CountryDocument = serde_json::from_str(&content)?;
    Ok(DatasetStore::new(document.countries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use demoscope_testing::fixtures::country;
    use demoscope_testing::world::TestWorld;

    #[test]
    fn test_load_dataset_round_trip() {
        let world = TestWorld::new().unwrap();
        let path = world
            .write_dataset(vec![country("Argentina", "AR"), country("Hungary", "HU")])
            .unwrap();

        let store = load_dataset(&path).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("Argentina").unwrap().iso2, "AR");
        assert!(store.get("Atlantis").is_none());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let world = TestWorld::new().unwrap();
        let err = load_dataset(&world.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_malformed_document_is_parse_error() {
        let world = TestWorld::new().unwrap();
        let path = world.write_raw_dataset("{ not json").unwrap();
        let err = load_dataset(&path).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[test]
    fn test_duplicate_names_keep_first_record() {
        let mut first = country("Georgia", "GE");
        first.deed_event_counts = 7;
        let second = country("Georgia", "GE");

        let store = DatasetStore::new(vec![first, second]);
        assert_eq!(store.get("Georgia").unwrap().deed_event_counts, 7);
    }
}
