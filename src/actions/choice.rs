//! The per-article action menu

use crate::query::ArticleRecord;
use colored::Colorize;

/// Text shown under the option list
pub const PROMPT: &str = "Choose article source or action";

/// One answer to the action prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionChoice {
    /// Retrieve the electronic source at this index
    Source(usize),
    /// Open the abstract page in the browser
    OpenAbstract,
    /// Export a citation
    Export,
    /// Do nothing
    Nothing,
}

impl ActionChoice {
    /// Parse an answer given `source_count` electronic sources
    ///
    /// Valid answers are `0..source_count`, `o`, `e` and `n`; anything else
    /// is `None`.
    #[must_use]
    pub fn parse(answer: &str, source_count: usize) -> Option<Self> {
        let answer = answer.trim();
        if let Some(index) = (0..source_count).find(|i| i.to_string() == answer) {
            return Some(Self::Source(index));
        }
        match answer {
            "o" => Some(Self::OpenAbstract),
            "e" => Some(Self::Export),
            "n" => Some(Self::Nothing),
            _ => None,
        }
    }
}

/// Authors, italic title and DOI, separated by blank lines
#[must_use]
pub fn render_record(record: &ArticleRecord) -> String {
    [
        record.authors.join(" and "),
        record.display_title().italic().to_string(),
        format!("doi:{}", record.first_doi().unwrap_or("-")),
    ]
    .join("\n\n")
}

/// Numbered sources followed by the fixed actions
#[must_use]
pub fn render_options(record: &ArticleRecord, export_format: &str) -> String {
    let sources: Vec<String> = record
        .sources()
        .iter()
        .enumerate()
        .map(|(i, source)| format!("{} {source}", format!("[{i}]").blue()))
        .collect();

    let fixed = [
        format!("{} Open on ADS", "[o]".green()),
        format!("{} Export {export_format}", "[e]".green()),
        format!("{} Do Nothing", "[n]".green()),
    ];

    if sources.is_empty() {
        fixed.join("  ")
    } else {
        format!("{}\n{}", sources.join("  "), fixed.join("  "))
    }
}
