//! Core traits for the UI abstraction layer

use super::error::Result;
use super::types::FinderResult;
use crate::config::Settings;
use crate::format::Buckets;

/// Configuration for a fuzzy finder run
#[derive(Debug, Clone)]
pub struct FinderConfig {
    /// Candidate lines, already formatted
    pub items: Vec<String>,
    /// Pass ANSI colors through to the list
    pub ansi: bool,
    /// Preview configuration (None = no preview)
    pub preview_config: Option<PreviewConfig>,
    /// Disable horizontal scrolling so hidden suffixes stay hidden
    pub no_hscroll: bool,
    /// Custom keybinds (`key:action`)
    pub bind: Vec<String>,
    /// Header line above the list
    pub header: Option<String>,
}

impl FinderConfig {
    /// Create a basic finder configuration
    #[must_use]
    pub const fn new(items: Vec<String>) -> Self {
        Self {
            items,
            ansi: false,
            preview_config: None,
            no_hscroll: false,
            bind: Vec::new(),
            header: None,
        }
    }

    /// Configuration for picking one article from formatted results
    ///
    /// Candidates are the "all" bucket; the reload bindings swap in the
    /// refereed and non-refereed scratch files.
    #[must_use]
    pub fn for_articles(buckets: &Buckets, settings: &Settings) -> Self {
        let items = buckets.all.iter().map(|l| l.as_str().to_string()).collect();

        Self::new(items)
            .with_ansi(true)
            .with_no_hscroll(true)
            .with_preview(PreviewConfig {
                command: settings.preview_command.clone(),
                size: 1,
            })
            .with_binds(settings.scratch.reload_bindings())
            .with_header(settings.header.clone())
    }

    /// Enable ANSI colors
    #[must_use]
    pub const fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Disable horizontal scrolling
    #[must_use]
    pub const fn with_no_hscroll(mut self, no_hscroll: bool) -> Self {
        self.no_hscroll = no_hscroll;
        self
    }

    /// Set preview configuration
    #[must_use]
    pub fn with_preview(mut self, config: PreviewConfig) -> Self {
        self.preview_config = Some(config);
        self
    }

    /// Set custom keybinds
    #[must_use]
    pub fn with_binds(mut self, bind: Vec<String>) -> Self {
        self.bind = bind;
        self
    }

    /// Set the header line
    #[must_use]
    pub fn with_header(mut self, header: String) -> Self {
        self.header = Some(header);
        self
    }
}

/// Configuration for the preview pane
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewConfig {
    /// Shell command rendering the highlighted line (`{}` is the line)
    pub command: String,
    /// Height of the pane above the list, in lines
    pub size: u16,
}

impl PreviewConfig {
    /// Selector `--preview-window` value, e.g. `up,1`
    #[must_use]
    pub fn window(&self) -> String {
        format!("up,{}", self.size)
    }
}

/// Trait for fuzzy finder implementations
///
/// Abstracts the selector so the session logic can run against a scripted
/// finder in tests.
pub trait FuzzyFinder {
    /// Run the fuzzy finder with given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the finder cannot be started or its I/O fails.
    /// A user cancelling is not an error; see [`FinderResult::aborted`].
    fn run(&self, config: FinderConfig) -> Result<FinderResult>;
}
