//! Interactive session
//!
//! Connects the formatter, the selector and the action resolver for one set
//! of search results.
//!
//! # Workflow
//!
//! ```text
//! Records
//!     ↓
//! format_records() → Buckets → scratch files
//!     ↓
//! Selector (all bucket, reload binds for the others)
//!     ├─ nothing chosen → Outcome::Cancelled
//!     └─ line → Selection → bibcode → record
//!             ↓
//!         Resolver → Outcome
//! ```

use crate::actions::{Outcome, Resolver};
use crate::config::Settings;
use crate::format::{Selection, format_records};
use crate::query::ArticleRecord;
use crate::ui::{FinderConfig, FuzzyFinder, UiError};
use crate::{FadsError, Result};
use tracing::{debug, info};

/// Run one selection and action for `records`
///
/// The resolver is only consulted if the selector returns a line.
///
/// # Errors
///
/// Returns [`FadsError`] if the scratch files cannot be written, the
/// selector fails or prints an unparseable line, the chosen bibcode is not
/// among `records`, or the action fails.
pub fn run(
    settings: &Settings,
    records: &[ArticleRecord],
    finder: &dyn FuzzyFinder,
    resolver: &Resolver<'_>,
) -> Result<Outcome> {
    let buckets = format_records(records, &settings.style);
    buckets.write(&settings.scratch)?;
    debug!(
        all = buckets.all.len(),
        refereed = buckets.refereed.len(),
        nonrefereed = buckets.nonrefereed.len(),
        "scratch files written"
    );

    let result = finder.run(FinderConfig::for_articles(&buckets, settings))?;
    let Some(line) = result.selected else {
        info!("selection cancelled");
        return Ok(Outcome::Cancelled);
    };

    let selection = Selection::parse(&line, settings.style.delimiter)
        .ok_or_else(|| UiError::InvalidSelection(line.clone()))?;
    info!(bibcode = selection.bibcode(), "article selected");

    let record = records
        .iter()
        .find(|r| r.bibcode == selection.bibcode())
        .ok_or_else(|| FadsError::RecordNotFound(selection.bibcode().to_string()))?;

    Ok(resolver.resolve(record)?)
}
