//! Configuration for identity resolution
//!
//! Only the rename map is read. YAML uses the LicensePlist layout:
//!
//! ```yaml
//! rename:
//!   swift-sdk: Iterable SDK
//!   LicensePlist: License Plist
//! ```
//!
//! JSON carries the same map under `renames` (or `rename`):
//!
//! ```json
//! { "renames": { "swift-sdk": "Iterable SDK" } }
//! ```
//!
//! Other top-level keys are ignored so a full LicensePlist config file loads.

use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ParseJson {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ParseYaml {
        path: PathBuf,
        source: serde_yml::Error,
    },
}

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Repository name -> display name
    #[serde(default, alias = "rename")]
    pub renames: HashMap<String, String>,
}

impl Config {
    /// Load configuration from `path`, or return defaults if it doesn't exist
    ///
    /// `.yml` and `.yaml` files are parsed as YAML, everything else as JSON.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;

        if is_yaml(path) {
            Self::from_yaml_str(&content).map_err(|source| ConfigError::ParseYaml {
                path: path.to_path_buf(),
                source,
            })
        } else {
            Self::from_json_str(&content).map_err(|source| ConfigError::ParseJson {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yml::Error> {
        serde_yml::from_str(content)
    }

    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Add a rename, replacing any previous one for the same repository
    pub fn with_rename(mut self, name: &str, display_name: &str) -> Self {
        self.renames.insert(name.to_string(), display_name.to_string());
        self
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml"))
}
