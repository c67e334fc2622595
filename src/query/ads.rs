//! HTTP client for the ADS REST API

use super::backend::SearchBackend;
use super::error::QueryError;
use super::record::ArticleRecord;
use super::request::QueryRequest;
use crate::config::Settings;
use reqwest::blocking::{Client, Response};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct SearchEnvelope {
    response: SearchDocs,
}

#[derive(Debug, Deserialize)]
struct SearchDocs {
    #[serde(default)]
    docs: Vec<ArticleRecord>,
}

#[derive(Debug, Deserialize)]
struct ExportEnvelope {
    export: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: serde_json::Value,
}

/// Blocking ADS API client
#[derive(Debug, Clone)]
pub struct AdsClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl AdsClient {
    /// Create a client against `base_url` (e.g. `https://api.adsabs.harvard.edu/v1`)
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Http`] if the HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, QueryError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    /// Create a client from resolved settings
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::Http`] if the HTTP client cannot be built.
    pub fn from_settings(settings: &Settings) -> Result<Self, QueryError> {
        Self::new(&settings.api_url, settings.token.clone(), settings.timeout)
    }

    fn token(&self) -> Result<&str, QueryError> {
        self.token.as_deref().ok_or(QueryError::MissingToken)
    }

    /// Turn a non-success response into [`QueryError::Api`], keeping the
    /// server's own message where it sent one.
    fn check(response: Response) -> Result<Response, QueryError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().unwrap_or_default();
        let message = serde_json::from_str::<ErrorEnvelope>(&body)
            .map(|e| match e.error {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            })
            .ok()
            .filter(|m| !m.is_empty())
            .or_else(|| status.canonical_reason().map(ToString::to_string))
            .unwrap_or_else(|| body.trim().to_string());

        Err(QueryError::Api {
            status: status.as_u16(),
            message,
        })
    }
}

impl SearchBackend for AdsClient {
    fn search(&self, request: &QueryRequest) -> Result<Vec<ArticleRecord>, QueryError> {
        let token = self.token()?;
        let q = request.to_query_string();
        debug!(q = %q, rows = request.rows, sort = %request.sort, "sending search query");

        let response = self
            .client
            .get(format!("{}/search/query", self.base_url))
            .bearer_auth(token)
            .query(&[
                ("q", q.as_str()),
                ("fl", request.field_list().as_str()),
                ("sort", request.sort.as_str()),
                ("rows", request.rows.to_string().as_str()),
            ])
            .send()?;

        let body = Self::check(response)?.text()?;
        let envelope: SearchEnvelope =
            serde_json::from_str(&body).map_err(|e| QueryError::Decode(e.to_string()))?;

        debug!(count = envelope.response.docs.len(), "search returned");
        Ok(envelope.response.docs)
    }

    fn export(&self, bibcode: &str, format: &str) -> Result<String, QueryError> {
        let token = self.token()?;
        debug!(bibcode, format, "exporting citation");

        let response = self
            .client
            .post(format!("{}/export/{format}", self.base_url))
            .bearer_auth(token)
            .json(&json!({ "bibcode": [bibcode] }))
            .send()?;

        let body = Self::check(response)?.text()?;
        let envelope: ExportEnvelope =
            serde_json::from_str(&body).map_err(|e| QueryError::Decode(e.to_string()))?;

        Ok(envelope.export)
    }
}
