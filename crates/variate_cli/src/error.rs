//! CLI error type.

use thiserror::Error;
use variate_core::{SampleError, ValidationError};

use crate::config::ConfigError;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// An argument value that cannot be used as given.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A token of the parameter string is not a real number.
    #[error("Invalid parameter '{token}': expected a real number")]
    ParamParse {
        /// The offending token.
        token: String,
    },

    /// Configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Unknown distribution identifier.
    #[error(transparent)]
    Sample(#[from] SampleError),

    /// Parameters rejected by the distribution.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Reading or writing a file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialisation failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
