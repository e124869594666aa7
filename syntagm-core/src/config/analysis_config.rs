//! Analysis configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Configuration for an analysis run.
///
/// All fields are optional; `effective_*()` accessors supply the compiled
/// defaults. Loadable from TOML, with unknown keys ignored for forward
/// compatibility.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Run per-text feature extraction on the rayon thread pool.
    /// Default: true.
    pub parallel: Option<bool>,
    /// Abort the whole run on the first failing text instead of skipping
    /// it and collecting the error. Default: true.
    pub fail_fast: Option<bool>,
}

impl AnalysisConfig {
    /// Returns the effective parallelism switch, defaulting to true.
    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(true)
    }

    /// Returns the effective strictness, defaulting to true (fail fast).
    pub fn effective_fail_fast(&self) -> bool {
        self.fail_fast.unwrap_or(true)
    }

    /// Parse a configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }
}
