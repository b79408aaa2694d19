//! CLI configuration file
//!
//! A small JSON file pointing the binary at the content set. Every field
//! has a default, and a missing config file means "all defaults", so the
//! binary runs in a conventional checkout with no setup.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Released-version records file
    #[serde(default = "default_records_path")]
    pub records_path: PathBuf,

    /// Planned/roadmap stubs file; a missing file is an empty collection,
    /// roadmap data is optional content
    #[serde(default = "default_planned_path")]
    pub planned_path: PathBuf,
}

fn default_records_path() -> PathBuf {
    PathBuf::from("./data/versions.json")
}

fn default_planned_path() -> PathBuf {
    PathBuf::from("./data/planned.json")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            records_path: default_records_path(),
            planned_path: default_planned_path(),
        }
    }
}

impl Config {
    /// Loads the config file, or the defaults when the file does not
    /// exist. A present-but-malformed file is a config error, never a
    /// silent fallback.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let raw = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("{}: {}", path.display(), e)))?;

        serde_json::from_str(&raw)
            .map_err(|e| CliError::config_error(format!("{}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_config_uses_defaults() {
        let config = Config::load(Path::new("/nonexistent/verdex.json")).unwrap();
        assert_eq!(config.records_path, default_records_path());
        assert_eq!(config.planned_path, default_planned_path());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{ "records_path": "/srv/versions.json" }"#)
            .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.records_path, PathBuf::from("/srv/versions.json"));
        assert_eq!(config.planned_path, default_planned_path());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ nope").unwrap();
        assert!(Config::load(file.path()).is_err());
    }
}
