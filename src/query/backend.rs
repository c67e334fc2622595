//! Search backend abstraction

use super::error::QueryError;
use super::record::ArticleRecord;
use super::request::QueryRequest;

/// A literature database that can be searched and exported from
///
/// Implementations must perform the request eagerly and report any
/// authentication, network or decoding failure from the call itself.
pub trait SearchBackend {
    /// Execute a search and return the records in backend order
    ///
    /// # Errors
    ///
    /// Returns a [`QueryError`] if the request cannot be completed.
    fn search(&self, request: &QueryRequest) -> Result<Vec<ArticleRecord>, QueryError>;

    /// Export a citation for one bibcode in the given format (e.g. `bibtex`)
    ///
    /// # Errors
    ///
    /// Returns a [`QueryError`] if the request cannot be completed.
    fn export(&self, bibcode: &str, format: &str) -> Result<String, QueryError>;
}
