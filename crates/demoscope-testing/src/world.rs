//! On-disk fixtures: a temporary workspace holding a dataset document and a
//! small world-geometry document for loader tests.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;
use demoscope_types::{Country, CountryDocument};
use tempfile::TempDir;

pub struct TestWorld {
    root: TempDir,
}

impl TestWorld {
    pub fn new() -> Result<Self> {
        Ok(Self {
            root: TempDir::new()?,
        })
    }

    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Write `{ "countries": [...] }` and return its path.
    pub fn write_dataset(&self, countries: Vec<Country>) -> Result<PathBuf> {
        let path = self.root.path().join("countries.json");
        let document = CountryDocument { countries };
        fs::write(&path, serde_json::to_string_pretty(&document)?)?;
        Ok(path)
    }

    /// Write arbitrary bytes where a dataset is expected, for parse-error tests.
    pub fn write_raw_dataset(&self, content: &str) -> Result<PathBuf> {
        let path = self.root.path().join("countries.json");
        fs::write(&path, content)?;
        Ok(path)
    }

    /// Write a minimal GeoJSON FeatureCollection whose features carry the
    /// given numeric identifiers, each a small square polygon.
    pub fn write_geometry(&self, feature_ids: &[u64]) -> Result<PathBuf> {
        let features: Vec<String> = feature_ids
            .iter()
            .enumerate()
            .map(|(i, id)| {
                let x = i as f64 * 10.0;
                format!(
                    r#"{{"type":"Feature","id":{id},"properties":{{}},"geometry":{{"type":"Polygon","coordinates":[[[{x},0.0],[{x2},0.0],[{x2},5.0],[{x},5.0],[{x},0.0]]]}}}}"#,
                    id = id,
                    x = x,
                    x2 = x + 5.0,
                )
            })
            .collect();
        let doc = format!(
            r#"{{"type":"FeatureCollection","features":[{}]}}"#,
            features.join(",")
        );
        let path = self.root.path().join("world.geojson");
        fs::write(&path, doc)?;
        Ok(path)
    }
}
