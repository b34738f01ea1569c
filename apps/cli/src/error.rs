//! Error handling for the command-line tool

use std::path::PathBuf;

use ksrs_core::CoreError;
use thiserror::Error;

/// CLI error types
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Invalid card state: {0}")]
    InvalidState(#[source] serde_json::Error),

    #[error("Invalid timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Core(#[from] CoreError),
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
