//! Download error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while retrieving an article
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Network-level error (DNS, connection, TLS, body read)
    #[error("network error downloading {url}: {source}")]
    Network {
        /// The URL that failed to download
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-success HTTP response
    #[error("HTTP {status} downloading {url}")]
    HttpStatus {
        /// The URL that returned an error status
        url: String,
        /// The HTTP status code
        status: u16,
    },

    /// File system error while creating or writing the target
    #[error("IO error writing to {path}: {source}")]
    Io {
        /// The file path where the error occurred
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DownloadError {
    pub(crate) fn network(url: &str, source: reqwest::Error) -> Self {
        Self::Network {
            url: url.to_string(),
            source,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
