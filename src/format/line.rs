//! Display line encoding for the selector
//!
//! A line has two parts:
//!
//! ```text
//! [dim]bibcode: A & B & C[reset]<padding>:title
//! └──────── visible ────────────┘└─ hidden ──┘
//! ```
//!
//! The padding pushes the title past the right edge of the terminal so it
//! only shows up in the preview pane. [`DisplayLine::encode`] and
//! [`decode`] are exact inverses on the bibcode and title: anything that
//! could break the field split (the delimiter inside the author summary,
//! newlines anywhere) is replaced during encoding.

use crate::query::ArticleRecord;
use std::fmt;

/// SGR "faint" escape
pub const DIM: &str = "\x1b[2m";

/// SGR reset escape
pub const RESET: &str = "\x1b[0m";

/// Field delimiter reserved for the selector's parsing
pub const DELIMITER: char = ':';

/// Authors shown per line before truncation
const MAX_AUTHORS: usize = 3;

/// Styling and layout of display lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineStyle {
    /// Prefix for restricted-access records
    pub dim: String,
    /// Suffix closing `dim`
    pub reset: String,
    /// Separator between bibcode, summary and hidden title
    pub delimiter: char,
    /// Spaces between the visible summary and the hidden title
    pub padding: usize,
}

impl LineStyle {
    /// Default escapes and delimiter with the given padding width
    #[must_use]
    pub fn new(padding: usize) -> Self {
        Self {
            dim: DIM.to_string(),
            reset: RESET.to_string(),
            delimiter: DELIMITER,
            padding,
        }
    }
}

impl Default for LineStyle {
    fn default() -> Self {
        Self::new(80)
    }
}

/// One selector candidate derived from an [`ArticleRecord`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    text: String,
    refereed: bool,
}

impl DisplayLine {
    /// Format a record as a selector line
    #[must_use]
    pub fn encode(record: &ArticleRecord, style: &LineStyle) -> Self {
        let (prefix, suffix) = if record.is_open_access() {
            ("", "")
        } else {
            (style.dim.as_str(), style.reset.as_str())
        };

        let delimiter = style.delimiter;
        let summary = author_summary(&record.authors, delimiter);
        let title = single_line(record.display_title());

        let text = format!(
            "{prefix}{bibcode}{delimiter} {summary}{suffix}{padding}{delimiter}{title}",
            bibcode = record.bibcode,
            padding = " ".repeat(style.padding),
        );

        Self {
            text,
            refereed: record.is_refereed(),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the source record carries the `REFEREED` tag
    #[must_use]
    pub const fn is_refereed(&self) -> bool {
        self.refereed
    }
}

impl fmt::Display for DisplayLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Fields recovered from a display line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedLine {
    pub bibcode: String,
    pub title: String,
}

/// Recover bibcode and title from a line produced by [`DisplayLine::encode`]
///
/// Escape sequences are ignored, so this works both on the raw line and on
/// what a selector prints back after stripping colors. Returns `None` for
/// lines without two delimiters.
#[must_use]
pub fn decode(line: &str, delimiter: char) -> Option<DecodedLine> {
    let plain = strip_ansi(line.trim_end_matches(['\n', '\r']));
    let mut parts = plain.splitn(3, delimiter);

    let bibcode = parts.next()?.trim();
    let _summary = parts.next()?;
    let title = parts.next()?;

    if bibcode.is_empty() {
        return None;
    }

    Some(DecodedLine {
        bibcode: bibcode.to_string(),
        title: title.to_string(),
    })
}

/// The record chosen in the selector, identified by bibcode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection(String);

impl Selection {
    /// Parse the selector's first output line
    #[must_use]
    pub fn parse(line: &str, delimiter: char) -> Option<Self> {
        decode(line, delimiter).map(|decoded| Self(decoded.bibcode))
    }

    #[must_use]
    pub fn bibcode(&self) -> &str {
        &self.0
    }
}

fn author_summary(authors: &[String], delimiter: char) -> String {
    authors
        .iter()
        .take(MAX_AUTHORS)
        .map(|a| single_line(a).replace(delimiter, ";"))
        .collect::<Vec<_>>()
        .join(" & ")
}

fn single_line(s: &str) -> String {
    s.replace(['\n', '\r'], " ")
}

/// Remove CSI escape sequences (`ESC [ ... final-byte`)
fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }

    out
}
