//! Configuration file handling.
//!
//! This module provides loading and parsing of the optional `.customer_tracker.json`
//! file. Every field has a default, so a missing file or a partial file is fine.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default config file name, looked up in the current directory.
pub const DEFAULT_CONFIG_PATH: &str = ".customer_tracker.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config file '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level configuration file structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Database configuration
    pub database: DatabaseConfig,
    /// Insert the demonstration rows when the Customers table is empty
    pub seed_sample_data: bool,
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub path: PathBuf,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("Customers.db"),
        }
    }
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            seed_sample_data: true,
            log_level: "warn".to_string(),
        }
    }
}

impl ConfigFile {
    /// Load configuration from `path`, falling back to defaults when it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not valid JSON.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.display().to_string(),
                    source,
                })
            }
        };
        Self::from_json(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Apply command-line overrides on top of the file values.
    pub fn with_overrides(mut self, db: Option<PathBuf>, no_seed: bool) -> Self {
        if let Some(path) = db {
            self.database.path = path;
        }
        if no_seed {
            self.seed_sample_data = false;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[rstest]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = ConfigFile::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, ConfigFile::default());
        assert_eq!(config.database.path, PathBuf::from("Customers.db"));
        assert!(config.seed_sample_data);
        assert_eq!(config.log_level, "warn");
    }

    #[rstest]
    fn test_partial_file_keeps_defaults() {
        let config = ConfigFile::from_json(r#"{ "database": { "path": "/tmp/shop.db" } }"#).unwrap();
        assert_eq!(config.database.path, PathBuf::from("/tmp/shop.db"));
        assert!(config.seed_sample_data);
    }

    #[rstest]
    fn test_invalid_json_names_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let err = ConfigFile::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(&file.path().display().to_string()));
    }

    #[rstest]
    #[case(None, false, "Customers.db", true)]
    #[case(Some("other.db"), false, "other.db", true)]
    #[case(None, true, "Customers.db", false)]
    fn test_overrides(
        #[case] db: Option<&str>,
        #[case] no_seed: bool,
        #[case] expected_path: &str,
        #[case] expected_seed: bool,
    ) {
        let config = ConfigFile::default().with_overrides(db.map(PathBuf::from), no_seed);
        assert_eq!(config.database.path, PathBuf::from(expected_path));
        assert_eq!(config.seed_sample_data, expected_seed);
    }
}
