//! Configuration file for the `logstat` binary
//!
//! JSON, every field optional:
//!
//! ```json
//! { "format": "human", "recent_events": 10, "log_level": "warn" }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::event::DEFAULT_CAPACITY;
use crate::observability::Severity;
use crate::status::Format;

/// Result type for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Binary configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Output format when `--format` is not given (default: human)
    #[serde(default)]
    pub format: Format,

    /// Number of recent events kept for the status view (default: 10)
    #[serde(default = "default_recent_events")]
    pub recent_events: usize,

    /// Minimum severity written to stderr (default: warn)
    #[serde(default = "default_log_level")]
    pub log_level: Severity,
}

fn default_recent_events() -> usize {
    DEFAULT_CAPACITY
}

fn default_log_level() -> Severity {
    Severity::Warn
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: Format::default(),
            recent_events: default_recent_events(),
            log_level: default_log_level(),
        }
    }
}

impl Config {
    /// Parse and validate a JSON document
    pub fn from_json(content: &str) -> ConfigResult<Self> {
        let config: Config = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Load `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.recent_events == 0 {
            return Err(ConfigError::Invalid("recent_events must be > 0".to_string()));
        }
        Ok(())
    }
}
