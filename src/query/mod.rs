//! Query adapter
//!
//! Builds a [`QueryRequest`] from the fields the user set on the command
//! line, runs it against a [`SearchBackend`] and hands back the records.
//! The request is executed eagerly so that authentication and network
//! failures surface before the interactive selector is launched.

mod ads;
mod backend;
mod error;
mod record;
mod request;

pub use ads::AdsClient;
pub use backend::SearchBackend;
pub use error::QueryError;
pub use record::{ArticleRecord, OPEN_ACCESS, REFEREED};
pub use request::{QUERY_FIELDS, QueryRequest, SearchField};

use crate::config::Settings;
use tracing::info;

/// Build a request from user fields and the configured sort/row policy
///
/// # Errors
///
/// Returns [`QueryError::NoFields`] if every field is empty.
pub fn build_request<I, S>(fields: I, settings: &Settings) -> Result<QueryRequest, QueryError>
where
    I: IntoIterator<Item = (SearchField, S)>,
    S: Into<String>,
{
    QueryRequest::new(fields, settings.sort.clone(), settings.rows)
}

/// Execute a request and return every record
///
/// # Errors
///
/// Propagates the backend's [`QueryError`] unchanged.
pub fn execute(
    backend: &dyn SearchBackend,
    request: &QueryRequest,
) -> Result<Vec<ArticleRecord>, QueryError> {
    let records = backend.search(request)?;
    info!(count = records.len(), "query executed");
    Ok(records)
}
