//! UI error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// The selector program is not installed or not on `PATH`
    #[error("Selector program '{0}' not found")]
    SelectorNotFound(String),

    /// The selector could not be started
    #[error("Failed to launch selector {program}: {source}")]
    Spawn {
        /// Resolved program path
        program: PathBuf,
        /// Underlying spawn error
        #[source]
        source: std::io::Error,
    },

    /// The selector printed something that is not a display line
    #[error("Unrecognised selector output: {0:?}")]
    InvalidSelection(String),

    /// IO error while talking to the selector
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
