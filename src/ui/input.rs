//! User input abstraction layer
//!
//! Prompts go through the [`UserInput`] trait so the action menu can be
//! driven by scripted answers in tests and by dialoguer on a real terminal.

use std::io;

/// Trait for user input operations
///
/// # Examples
///
/// ```no_run
/// use fuzzy_ads::ui::input::{UserInput, DialoguerInput};
///
/// let input = DialoguerInput::new();
/// if let Some(answer) = input.prompt_text("Choose").unwrap() {
///     println!("You chose {answer}");
/// }
/// ```
pub trait UserInput {
    /// Prompt user for a line of text
    ///
    /// # Returns
    ///
    /// * `Ok(Some(String))` - User entered text
    /// * `Ok(None)` - No more input is available (e.g. stdin closed)
    /// * `Err(_)` - Input operation failed
    fn prompt_text(&self, prompt: &str) -> Result<Option<String>>;
}

/// Result type for user input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors that can occur during user input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// IO error during input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Input cancelled by user
    #[error("Input cancelled by user")]
    Cancelled,
}

/// CLI-based user input using dialoguer
pub struct DialoguerInput {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerInput {
    /// Create a new dialoguer-based input handler
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for DialoguerInput {
    fn prompt_text(&self, prompt: &str) -> Result<Option<String>> {
        let input = dialoguer::Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true);

        match input.interact_text() {
            Ok(text) => Ok(Some(text)),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
            Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::Interrupted => {
                Err(InputError::Cancelled)
            }
            Err(dialoguer::Error::IO(e)) => Err(InputError::Io(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_from_io() {
        let io_err = io::Error::other("test error");
        let input_err: InputError = io_err.into();
        assert!(matches!(input_err, InputError::Io(_)));
    }

    #[test]
    fn test_dialoguer_input_creation() {
        let _input = DialoguerInput::new();
        let _input2 = DialoguerInput::default();
    }
}
