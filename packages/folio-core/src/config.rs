//! Configuration loaded from TOML.

use crate::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default number of trades returned by the activity feed.
pub const DEFAULT_ACTIVITY_LIMIT: usize = 5;

/// Summary fields that are configured rather than computed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MetricsConfig {
    #[serde(default = "default_diversification_score")]
    pub diversification_score: f64,
    #[serde(default = "default_risk_level")]
    pub risk_level: String,
}

fn default_diversification_score() -> f64 {
    8.2
}

fn default_risk_level() -> String {
    "Moderate".to_string()
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            diversification_score: default_diversification_score(),
            risk_level: default_risk_level(),
        }
    }
}

/// Top-level Folio configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FolioConfig {
    /// Portfolio data file. Falls back to `JsonFileStore::default_path()`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
    /// Number of trades returned by the activity feed
    #[serde(default = "default_activity_limit")]
    pub activity_limit: usize,
    #[serde(default)]
    pub metrics: MetricsConfig,
}

fn default_activity_limit() -> usize {
    DEFAULT_ACTIVITY_LIMIT
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            activity_limit: DEFAULT_ACTIVITY_LIMIT,
            metrics: MetricsConfig::default(),
        }
    }
}

impl FolioConfig {
    /// Get the default config file path.
    ///
    /// Default path: `~/.folio/config.toml`
    /// Can be overridden with `FOLIO_CONFIG` environment variable.
    pub fn default_path() -> PathBuf {
        if let Ok(path) = env::var("FOLIO_CONFIG") {
            return PathBuf::from(path);
        }

        directories::BaseDirs::new()
            .map(|dirs| dirs.home_dir().join(".folio/config.toml"))
            .unwrap_or_else(|| PathBuf::from("folio.toml"))
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from `path`, using defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        Self::from_file(path)
    }
}
