//! Command-line interface definitions and parsing
//!
//! One flat command: every search keyword is an optional `--<keyword>`
//! flag, plus a few ambient flags. Keywords are passed to the backend as
//! given; combining them is the backend's business.
//!
//! # Examples
//!
//! ```
//! use clap::Parser;
//! use fuzzy_ads::cli::Cli;
//! use fuzzy_ads::query::SearchField;
//!
//! let cli = Cli::parse_from(["fuzzy-ads", "-a", "Smith, J.", "-y", "2020"]);
//! assert!(cli.has_query());
//! assert_eq!(
//!     cli.query_fields(),
//!     vec![
//!         (SearchField::Author, "Smith, J.".to_string()),
//!         (SearchField::Year, "2020".to_string()),
//!     ]
//! );
//! ```

use crate::query::SearchField;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

#[derive(Parser, Debug, Default)]
#[command(name = "fuzzy-ads")]
#[command(version, about = "Fuzzy-find papers on ADS and open, download or cite them", long_about = None)]
pub struct Cli {
    /// Search abstract, title and keywords
    #[arg(long, value_name = "TEXT")]
    pub abs: Option<String>,

    /// Search the abstract only
    #[arg(long = "abstract", value_name = "TEXT")]
    pub abstract_: Option<String>,

    /// arXiv identifier
    #[arg(long, value_name = "ID")]
    pub arxiv: Option<String>,

    /// Author name, e.g. "Smith, J."
    #[arg(short, long)]
    pub author: Option<String>,

    #[arg(long)]
    pub bibcode: Option<String>,

    /// Journal abbreviation, e.g. ApJ
    #[arg(long)]
    pub bibstem: Option<String>,

    /// Search the full text body
    #[arg(long, value_name = "TEXT")]
    pub body: Option<String>,

    /// astronomy, physics or general
    #[arg(long)]
    pub database: Option<String>,

    #[arg(long)]
    pub doi: Option<String>,

    /// First author name
    #[arg(long = "first-author", visible_alias = "fa", value_name = "AUTHOR")]
    pub first_author: Option<String>,

    /// Search full text, abstract, title and keywords
    #[arg(long, value_name = "TEXT")]
    pub full: Option<String>,

    /// Any identifier (bibcode, DOI, arXiv id)
    #[arg(long, value_name = "ID")]
    pub identifier: Option<String>,

    #[arg(long)]
    pub keyword: Option<String>,

    /// Property tag, e.g. refereed or openaccess
    #[arg(long)]
    pub property: Option<String>,

    /// Raw ADS query, passed through unchanged
    #[arg(short, long)]
    pub query: Option<String>,

    #[arg(long)]
    pub title: Option<String>,

    /// Publication year or range, e.g. 2020 or 2015-2020
    #[arg(short, long)]
    pub year: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    fn field(&self, field: SearchField) -> Option<&str> {
        let value = match field {
            SearchField::Abs => &self.abs,
            SearchField::Abstract => &self.abstract_,
            SearchField::Arxiv => &self.arxiv,
            SearchField::Author => &self.author,
            SearchField::Bibcode => &self.bibcode,
            SearchField::Bibstem => &self.bibstem,
            SearchField::Body => &self.body,
            SearchField::Database => &self.database,
            SearchField::Doi => &self.doi,
            SearchField::FirstAuthor => &self.first_author,
            SearchField::Full => &self.full,
            SearchField::Identifier => &self.identifier,
            SearchField::Keyword => &self.keyword,
            SearchField::Property => &self.property,
            SearchField::Query => &self.query,
            SearchField::Title => &self.title,
            SearchField::Year => &self.year,
        };
        value.as_deref()
    }

    /// Search keywords the user set to a non-blank value
    #[must_use]
    pub fn query_fields(&self) -> Vec<(SearchField, String)> {
        SearchField::ALL
            .into_iter()
            .filter_map(|field| {
                self.field(field)
                    .filter(|v| !v.trim().is_empty())
                    .map(|v| (field, v.to_string()))
            })
            .collect()
    }

    /// True if at least one search keyword was given
    #[must_use]
    pub fn has_query(&self) -> bool {
        !self.query_fields().is_empty()
    }

    /// Default tracing filter for the `-v` count; `RUST_LOG` overrides it
    #[must_use]
    pub const fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
