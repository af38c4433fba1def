//! Config error types

use std::path::PathBuf;

use thiserror::Error;

/// Result type for config operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised while loading or validating a system definition
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not valid JSON for the expected shape
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A rule key must be exactly one symbol
    #[error("Rule key '{0}' is not a single symbol")]
    RuleKeyNotSingleSymbol(String),

    /// A stochastic weight must lie in (0, 100]
    #[error("Rule '{symbol}' has weight {weight}, expected a value in (0, 100]")]
    WeightOutOfRange { symbol: char, weight: f64 },
}

impl ConfigError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
