//! CLI-specific error types

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced to the terminal
#[derive(Debug, Error)]
pub enum CliError {
    /// Definition file problems (read, parse, validation)
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// init refuses to clobber an existing definition
    #[error("Refusing to overwrite existing definition at {0}")]
    AlreadyInitialized(PathBuf),

    /// stdout/stderr write failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
