//! Error types for the terminal front end.

use crate::config::ConfigError;
use thiserror::Error;

/// Front-end error type
///
/// Draw failures are recovered inside the menus and never reach this type;
/// only problems that end the process do.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Writing to the terminal failed
    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),
}

/// Result alias for the front end.
pub type Result<T> = std::result::Result<T, CliError>;
