use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Fixed relative path of the dataset snapshot.
pub const DEFAULT_DATA_PATH: &str = "data/countries.json";

/// Fixed remote location of the world-geometry document. Features carry
/// numeric country identifiers (ISO 3166-1 numeric), extracted tolerantly
/// from the feature id or its properties.
pub const DEFAULT_GEOMETRY_URL: &str =
    "https://raw.githubusercontent.com/nvkelso/natural-earth-vector/master/geojson/ne_110m_admin_0_countries.geojson";

/// Optional TOML configuration. A missing file yields the defaults;
/// command-line flags override anything set here.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data_path: Option<PathBuf>,
    #[serde(default)]
    pub geometry_url: Option<String>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Flags win over config, config wins over defaults.
    pub fn resolve_data_path(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .or_else(|| self.data_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
    }

    pub fn resolve_geometry_url(&self, flag: Option<&str>) -> String {
        flag.map(str::to_string)
            .or_else(|| self.geometry_url.clone())
            .unwrap_or_else(|| DEFAULT_GEOMETRY_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = Config::load_from(Path::new("/nonexistent/demoscope.toml")).unwrap();
        assert!(config.data_path.is_none());
        assert_eq!(
            config.resolve_data_path(None),
            PathBuf::from(DEFAULT_DATA_PATH)
        );
        assert_eq!(config.resolve_geometry_url(None), DEFAULT_GEOMETRY_URL);
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demoscope.toml");
        fs::write(
            &path,
            "data_path = \"/srv/snapshot.json\"\ngeometry_url = \"https://example.org/world.geojson\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(
            config.resolve_data_path(None),
            PathBuf::from("/srv/snapshot.json")
        );
        assert_eq!(
            config.resolve_data_path(Some(Path::new("/tmp/other.json"))),
            PathBuf::from("/tmp/other.json")
        );
        assert_eq!(
            config.resolve_geometry_url(Some("https://flags.win/")),
            "https://flags.win/"
        );
    }

    #[test]
    fn test_malformed_config_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("demoscope.toml");
        fs::write(&path, "data_path = [not toml").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
