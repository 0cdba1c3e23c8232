//! Configuration
//!
//! A single JSON file with two optional sections:
//!
//! ```json
//! {
//!   "validation": { "max_version_length": 250 },
//!   "server": { "host": "0.0.0.0", "port": 9410 }
//! }
//! ```
//!
//! Missing sections and keys take their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::http_server::HttpServerConfig;

/// Longest release name accepted by default
pub const VERSION_LENGTH: usize = 250;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed config: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("invalid config value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },
}

/// Limits applied by the release validators
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Maximum characters in a release `ref` (default: 250)
    #[serde(default = "default_max_version_length")]
    pub max_version_length: usize,
}

fn default_max_version_length() -> usize {
    VERSION_LENGTH
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_version_length: default_max_version_length(),
        }
    }
}

impl ValidationConfig {
    /// Create a config with the given `ref` length limit
    pub fn with_max_version_length(max_version_length: usize) -> Self {
        Self { max_version_length }
    }

    /// Rejects limits no payload could satisfy
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_version_length == 0 {
            return Err(ConfigError::Invalid {
                key: "validation.max_version_length",
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

/// Complete configuration file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub validation: ValidationConfig,

    #[serde(default)]
    pub server: HttpServerConfig,
}

impl AppConfig {
    /// Parses and checks a configuration document
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json)?;
        config.validation.validate()?;
        Ok(config)
    }

    /// Loads a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    /// Loads `path` if given, otherwise returns the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
