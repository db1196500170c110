//! Bridge configuration
//!
//! Loaded from a TOML file; every field has a default so partial files are
//! accepted.
//!
//! ```toml
//! score_error_threshold = 32
//! fallback_function = "fallback"
//! trace_params = true
//! ```

use crate::outcome::status;
use crate::request::FALLBACK_FUNCTION;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {reason}")]
    Invalid { reason: String },
}

/// Runtime settings for [`crate::InterCall`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    /// First status code treated as a callee-logic failure
    pub score_error_threshold: u32,
    /// Function dispatched when the caller names none
    pub fallback_function: String,
    /// Include call parameters in debug traces
    pub trace_params: bool,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            score_error_threshold: status::SCORE_ERROR,
            fallback_function: FALLBACK_FUNCTION.to_string(),
            trace_params: true,
        }
    }
}

impl BridgeConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: BridgeConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when the file is absent
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::warn!(
                "Bridge config {} not found; using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        tracing::info!(
            "Loaded bridge config from {}: threshold={}, fallback={}",
            path.display(),
            config.score_error_threshold,
            config.fallback_function
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.score_error_threshold == 0 {
            return Err(ConfigError::Invalid {
                reason: "score_error_threshold must be greater than zero".to_string(),
            });
        }
        if self.fallback_function.is_empty() {
            return Err(ConfigError::Invalid {
                reason: "fallback_function cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    pub fn with_threshold(mut self, score_error_threshold: u32) -> Self {
        self.score_error_threshold = score_error_threshold;
        self
    }
}
