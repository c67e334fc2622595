//! fuzzy-ads - Fuzzy-find papers in the Astrophysics Data System
//!
//! This library runs an ADS search, shows the results in an external fuzzy
//! selector (fzf by default) and then opens, downloads or cites the chosen
//! paper.

use thiserror::Error;

pub mod actions;
pub mod cli;
pub mod config;
pub mod download;
pub mod format;
pub mod query;
pub mod session;
pub mod ui;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum FadsError {
    /// Search or export request failed
    #[error(transparent)]
    Query(#[from] query::QueryError),
    /// Selector error
    #[error("Selector error: {0}")]
    Ui(#[from] ui::UiError),
    /// Prompt error
    #[error("Input error: {0}")]
    Input(#[from] ui::InputError),
    /// Action could not be carried out
    #[error(transparent)]
    Action(#[from] actions::ActionError),
    /// Article retrieval failed
    #[error("Download failed: {0}")]
    Download(#[from] download::DownloadError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The selector returned a bibcode that is not among the results
    #[error("No record with bibcode '{0}' in the search results")]
    RecordNotFound(String),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for fuzzy-ads operations
pub type Result<T> = std::result::Result<T, FadsError>;
