//! Configuration file loading.
//!
//! A `txtfmt.yaml` file carries the engine [`Options`] plus the extensions
//! used to find sources and name targets. Every key is optional:
//!
//! ```yaml
//! width: 72
//! close_match: nested
//! source_extension: txtm
//! target_extension: txt
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use txtfmt_markup::Options;

/// Name of the config file picked up from the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "txtfmt.yaml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(flatten)]
    pub options: Options,
    pub source_extension: String,
    pub target_extension: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            options: Options::default(),
            source_extension: "txtm".to_string(),
            target_extension: "txt".to_string(),
        }
    }
}

impl Config {
    pub fn from_yaml(yaml: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file deserializes as unit, not as an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&text).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Loads `explicit` when given, otherwise `txtfmt.yaml` in `dir` if it
    /// exists, otherwise the defaults.
    pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let candidate = dir.join(DEFAULT_CONFIG_FILE);
                if candidate.is_file() {
                    Self::from_file(&candidate)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use txtfmt_markup::CloseMatch;

    #[test]
    fn empty_yaml_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
        assert_eq!(Config::from_yaml("\n  \n").unwrap(), Config::default());
    }

    #[test]
    fn partial_yaml_keeps_other_defaults() {
        let config = Config::from_yaml("width: 40\nclose_match: nested\n").unwrap();
        assert_eq!(config.options.width, 40);
        assert_eq!(config.options.close_match, CloseMatch::Nested);
        assert_eq!(config.options.max_depth, Options::default().max_depth);
        assert_eq!(config.source_extension, "txtm");
        assert_eq!(config.target_extension, "txt");
    }

    #[test]
    fn extensions_and_formats() {
        let yaml = "source_extension: md\ntarget_extension: out\ndate_format: \"%Y\"\n";
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.source_extension, "md");
        assert_eq!(config.target_extension, "out");
        assert_eq!(config.options.date_format, "%Y");
    }

    #[test]
    fn bad_yaml_is_an_error() {
        assert!(Config::from_yaml("width: [1, 2").is_err());
        assert!(Config::from_yaml("width: wide").is_err());
    }

    #[test]
    fn discover_without_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::discover(None, dir.path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn discover_reads_local_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_FILE), "width: 30\n").unwrap();
        let config = Config::discover(None, dir.path()).unwrap();
        assert_eq!(config.options.width, 30);
    }

    #[test]
    fn explicit_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.yaml");
        let err = Config::discover(Some(&missing), dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
