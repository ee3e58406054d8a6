//! YAML configuration file support.
//!
//! Deployments that sweep search parameters (rotate schedules, per-corpus
//! thresholds) keep them in a single versioned YAML file and load it at
//! runtime instead of rebuilding.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//!
//! search:
//!   keybits: 16
//!   max_bit_difference: 3
//!   rotate: 0
//!   use_parallel: true
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use simpair_search::SearchConfig;

/// Configuration file versions this build understands.
const SUPPORTED_VERSIONS: &[&str] = &["1.0"];

/// Errors that can occur when loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimpairConfig {
    /// Configuration schema version.
    #[serde(default = "SimpairConfig::default_version")]
    pub version: String,
    /// Search stage configuration; absent sections fall back to defaults.
    #[serde(default)]
    pub search: Option<SearchConfig>,
}

impl SimpairConfig {
    fn default_version() -> String {
        "1.0".to_string()
    }

    /// Effective search configuration.
    pub fn search_config(&self) -> SearchConfig {
        match self.search {
            Some(cfg) => cfg,
            None => {
                tracing::warn!("config has no `search` section, using defaults");
                SearchConfig::default()
            }
        }
    }
}

impl Default for SimpairConfig {
    fn default() -> Self {
        Self {
            version: Self::default_version(),
            search: None,
        }
    }
}

/// Parse and validate a configuration from YAML text.
pub fn parse_config(yaml: &str) -> Result<SimpairConfig, ConfigLoadError> {
    let cfg: SimpairConfig = serde_yaml::from_str(yaml)?;
    if !SUPPORTED_VERSIONS.contains(&cfg.version.as_str()) {
        return Err(ConfigLoadError::UnsupportedVersion(cfg.version));
    }
    if let Some(search) = &cfg.search {
        search
            .validate()
            .map_err(|err| ConfigLoadError::Validation(err.to_string()))?;
    }
    Ok(cfg)
}

/// Load and validate a configuration file from disk.
pub fn load_config(path: impl AsRef<Path>) -> Result<SimpairConfig, ConfigLoadError> {
    let raw = fs::read_to_string(path)?;
    parse_config(&raw)
}
