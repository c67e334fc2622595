//! Action resolver errors

use crate::download::DownloadError;
use crate::query::QueryError;
use crate::ui::InputError;
use thiserror::Error;

/// Errors raised while prompting for or carrying out an action
#[derive(Debug, Error)]
pub enum ActionError {
    /// The prompt could not be read
    #[error(transparent)]
    Input(#[from] InputError),

    /// Citation export failed
    #[error(transparent)]
    Backend(#[from] QueryError),

    /// Article retrieval failed
    #[error(transparent)]
    Download(#[from] DownloadError),

    /// A source index the record does not list
    #[error("{bibcode} has no source [{index}]")]
    NoSuchSource {
        bibcode: String,
        index: usize,
    },

    /// The browser or PDF viewer could not be started
    #[error("Failed to open {target}: {source}")]
    Launch {
        /// URL or path that was being opened
        target: String,
        #[source]
        source: std::io::Error,
    },
}
