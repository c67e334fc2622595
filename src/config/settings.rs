//! Resolved, immutable runtime settings

use super::FadsConfig;
use crate::format::{BUCKET_HEADER, LineStyle, ScratchFiles};
use std::path::PathBuf;
use std::time::Duration;

/// Fallback when the terminal size cannot be queried (e.g. not a tty)
const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// Everything the pipeline needs, fixed at startup
///
/// Built once from a [`FadsConfig`] and passed by reference to each
/// component. Nothing in here changes after construction.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_url: String,
    pub ui_url: String,
    pub token: Option<String>,
    pub selector: String,
    pub rows: u32,
    pub sort: String,
    pub export_format: String,
    pub timeout: Duration,
    pub download_dir: PathBuf,
    pub scratch: ScratchFiles,
    pub style: LineStyle,
    /// Header shown above the selector's candidate list
    pub header: String,
    /// Shell command the selector runs to fill its preview window
    pub preview_command: String,
    pub show_progress: bool,
}

impl Settings {
    /// Resolve a loaded config against the current environment
    ///
    /// `terminal_width` sets how far the hidden title is pushed off-screen.
    #[must_use]
    pub fn resolve(config: &FadsConfig, terminal_width: usize) -> Self {
        let temp = std::env::temp_dir();
        let style = LineStyle::new(terminal_width);

        Self {
            api_url: config.api_url.trim_end_matches('/').to_string(),
            ui_url: config.ui_url.trim_end_matches('/').to_string(),
            token: config.resolve_token(),
            selector: config.selector.clone(),
            rows: config.rows,
            sort: config.sort.clone(),
            export_format: config.export_format.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
            download_dir: config.download_dir.clone().unwrap_or_else(|| temp.clone()),
            scratch: ScratchFiles::in_dir(config.scratch_dir.as_deref().unwrap_or(&temp)),
            preview_command: format!("echo {{}} | cut -d'{}' -f3-", style.delimiter),
            style,
            header: BUCKET_HEADER.to_string(),
            show_progress: config.show_progress,
        }
    }

    /// Web page of a record on the ADS interface
    #[must_use]
    pub fn abstract_url(&self, bibcode: &str) -> String {
        format!("{}/abs/{bibcode}", self.ui_url)
    }

    /// Link-gateway URL resolving one electronic source of a record
    #[must_use]
    pub fn gateway_url(&self, bibcode: &str, source: &str) -> String {
        format!("{}/link_gateway/{bibcode}/{source}", self.ui_url)
    }
}

/// Current terminal width in columns
#[must_use]
pub fn terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(cols, _)| usize::from(cols))
        .ok()
        .filter(|&cols| cols > 0)
        .unwrap_or(DEFAULT_TERMINAL_WIDTH)
}
