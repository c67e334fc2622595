//! Article records returned by a search backend

use serde::{Deserialize, Serialize};

/// Property tag for freely downloadable records
pub const OPEN_ACCESS: &str = "OPENACCESS";

/// Property tag for peer-reviewed records
pub const REFEREED: &str = "REFEREED";

/// One literature record
///
/// Field names follow the ADS JSON documents so records deserialize
/// straight out of a search response. List fields missing from the
/// response default to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// Stable unique key
    pub bibcode: String,
    /// Ordered author list
    #[serde(rename = "author", default)]
    pub authors: Vec<String>,
    /// Titles; the first is used for display
    #[serde(default)]
    pub title: Vec<String>,
    /// Publication year
    #[serde(default)]
    pub year: Option<String>,
    /// Property tags such as `OPENACCESS` or `REFEREED`
    #[serde(rename = "property", default)]
    pub properties: Vec<String>,
    /// Electronic source identifiers (`PUB_PDF`, `EPRINT_HTML`, ...)
    #[serde(default)]
    pub esources: Option<Vec<String>>,
    /// Digital object identifiers
    #[serde(default)]
    pub doi: Option<Vec<String>>,
}

impl ArticleRecord {
    /// Create a record with only a bibcode, authors and a title
    #[must_use]
    pub fn new(bibcode: impl Into<String>, authors: Vec<String>, title: impl Into<String>) -> Self {
        Self {
            bibcode: bibcode.into(),
            authors,
            title: vec![title.into()],
            year: None,
            properties: Vec::new(),
            esources: None,
            doi: None,
        }
    }

    /// Builder-style property tags
    #[must_use]
    pub fn with_properties<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.properties = properties.into_iter().map(Into::into).collect();
        self
    }

    /// Builder-style electronic sources
    #[must_use]
    pub fn with_esources<I, S>(mut self, esources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.esources = Some(esources.into_iter().map(Into::into).collect());
        self
    }

    /// Builder-style DOI
    #[must_use]
    pub fn with_doi(mut self, doi: impl Into<String>) -> Self {
        self.doi = Some(vec![doi.into()]);
        self
    }

    fn has_property(&self, tag: &str) -> bool {
        self.properties.iter().any(|p| p == tag)
    }

    #[must_use]
    pub fn is_open_access(&self) -> bool {
        self.has_property(OPEN_ACCESS)
    }

    #[must_use]
    pub fn is_refereed(&self) -> bool {
        self.has_property(REFEREED)
    }

    /// First title, or an empty string for untitled records
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title.first().map_or("", String::as_str)
    }

    /// First DOI, if any
    #[must_use]
    pub fn first_doi(&self) -> Option<&str> {
        self.doi.as_ref().and_then(|d| d.first()).map(String::as_str)
    }

    /// Electronic sources; empty when the record has none
    #[must_use]
    pub fn sources(&self) -> &[String] {
        self.esources.as_deref().unwrap_or_default()
    }
}
