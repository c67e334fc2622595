//! Common types for the UI abstraction layer

/// Result from a fuzzy finder run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderResult {
    /// First line printed by the selector, without its newline
    pub selected: Option<String>,
}

impl FinderResult {
    /// Create a result with a chosen line
    #[must_use]
    pub fn selected(line: impl Into<String>) -> Self {
        Self {
            selected: Some(line.into()),
        }
    }

    /// Create a result for a run that ended without a choice
    #[must_use]
    pub const fn aborted() -> Self {
        Self { selected: None }
    }

    /// True when the user left the selector without choosing
    #[must_use]
    pub const fn is_aborted(&self) -> bool {
        self.selected.is_none()
    }
}
