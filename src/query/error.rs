//! Query-specific error types
//!
//! Everything that can go wrong between building a request and holding the
//! parsed records. All of these are fatal for a session: they are surfaced
//! before the selector is ever spawned.

use thiserror::Error;

/// Errors raised by the query adapter and search backends
#[derive(Debug, Error)]
pub enum QueryError {
    /// No search field was set, so there is nothing to send
    #[error("No search fields given")]
    NoFields,

    /// No API token could be found in config, environment or `~/.ads/dev_key`
    #[error(
        "No ADS API token found. Set ADS_API_TOKEN, add `token` to the config file, or write it to ~/.ads/dev_key"
    )]
    MissingToken,

    /// Transport-level failure (DNS, TLS, connection, body read)
    #[error("Request to ADS failed: {0}")]
    Http(#[from] reqwest::Error),

    /// ADS answered with a non-success status
    #[error("ADS returned HTTP {status}: {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message from the response body, or the canonical reason
        message: String,
    },

    /// Response body did not have the expected shape
    #[error("Malformed ADS response: {0}")]
    Decode(String),
}
