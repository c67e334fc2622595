//! Structured search requests
//!
//! A [`QueryRequest`] is the only thing a backend ever sees from the command
//! line: the user's fields plus the fixed fetch/sort/row policy.

use super::error::QueryError;
use std::collections::BTreeMap;
use std::fmt;

/// Record fields requested from the backend for every query
pub const QUERY_FIELDS: &[&str] = &[
    "author", "bibcode", "year", "title", "property", "esources", "doi",
];

/// Search keywords understood by the query adapter
///
/// A subjective selection of the ADS search syntax. Declaration order is
/// the order fields appear in the rendered query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SearchField {
    Abs,
    Abstract,
    Arxiv,
    Author,
    Bibcode,
    Bibstem,
    Body,
    Database,
    Doi,
    FirstAuthor,
    Full,
    Identifier,
    Keyword,
    Property,
    Query,
    Title,
    Year,
}

impl SearchField {
    /// Every recognised field
    pub const ALL: [Self; 17] = [
        Self::Abs,
        Self::Abstract,
        Self::Arxiv,
        Self::Author,
        Self::Bibcode,
        Self::Bibstem,
        Self::Body,
        Self::Database,
        Self::Doi,
        Self::FirstAuthor,
        Self::Full,
        Self::Identifier,
        Self::Keyword,
        Self::Property,
        Self::Query,
        Self::Title,
        Self::Year,
    ];

    /// Field name in the ADS query language
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Abs => "abs",
            Self::Abstract => "abstract",
            Self::Arxiv => "arxiv",
            Self::Author => "author",
            Self::Bibcode => "bibcode",
            Self::Bibstem => "bibstem",
            Self::Body => "body",
            Self::Database => "database",
            Self::Doi => "doi",
            Self::FirstAuthor => "first_author",
            Self::Full => "full",
            Self::Identifier => "identifier",
            Self::Keyword => "keyword",
            Self::Property => "property",
            Self::Query => "q",
            Self::Title => "title",
            Self::Year => "year",
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    fields: BTreeMap<SearchField, String>,
    /// Record fields to fetch
    pub fl: Vec<String>,
    /// Sort clause, e.g. `year desc`
    pub sort: String,
    /// Upper bound on returned rows
    pub rows: u32,
}

impl QueryRequest {
    /// Build a request from user-supplied fields
    ///
    /// Blank values are dropped. The fixed field list is always attached.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError::NoFields`] if nothing non-empty remains.
    pub fn new<I, S>(fields: I, sort: impl Into<String>, rows: u32) -> Result<Self, QueryError>
    where
        I: IntoIterator<Item = (SearchField, S)>,
        S: Into<String>,
    {
        let fields: BTreeMap<_, _> = fields
            .into_iter()
            .map(|(field, value)| (field, value.into()))
            .filter(|(_, value)| !value.trim().is_empty())
            .collect();

        if fields.is_empty() {
            return Err(QueryError::NoFields);
        }

        Ok(Self {
            fields,
            fl: QUERY_FIELDS.iter().map(ToString::to_string).collect(),
            sort: sort.into(),
            rows,
        })
    }

    /// Value of a single field, if set
    #[must_use]
    pub fn get(&self, field: SearchField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Render the ADS `q` parameter
    ///
    /// The generic query is passed through verbatim; every other field
    /// becomes `name:"value"`.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.fields
            .iter()
            .map(|(field, value)| match field {
                SearchField::Query => value.clone(),
                _ => format!("{}:\"{}\"", field.as_str(), value),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Comma-joined `fl` parameter
    #[must_use]
    pub fn field_list(&self) -> String {
        self.fl.join(",")
    }
}
