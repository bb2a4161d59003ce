//! Configuration file for conversions.
//!
//! Loaded from `.normalize/core-types.toml` in the working directory, or from
//! an explicit path.
//!
//! Example core-types.toml:
//! ```toml
//! [to-ts]
//! use-unknown = true
//! declaration = true
//! namespaces = "underscore"
//! user-package = "my-package"
//!
//! [from-ts]
//! non-exported = "inline"
//! namespaces = "join-dot"
//! unsupported = "warn"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::options::{FromTsOptions, ToTsOptions};

/// Errors loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreTypesConfig {
    #[serde(rename = "to-ts")]
    pub to_ts: ToTsOptions,
    #[serde(rename = "from-ts")]
    pub from_ts: FromTsOptions,
}

impl CoreTypesConfig {
    /// Path of the project config under `root`.
    pub fn project_path(root: &Path) -> PathBuf {
        root.join(".normalize").join("core-types.toml")
    }

    /// Load the project config under `root`, or defaults if there is none.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = Self::project_path(root);
        if !path.is_file() {
            return Ok(Self::default());
        }
        Self::load_file(&path)
    }

    /// Load config from a file path.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
