//! Action resolver
//!
//! After a record is selected the user picks what to do with it: retrieve
//! one of its electronic sources, open its abstract page, export a
//! citation, or nothing. The result is reported as an [`Outcome`].

mod choice;
mod error;
mod launcher;
mod resolver;

pub use choice::{ActionChoice, PROMPT, render_options, render_record};
pub use error::ActionError;
pub use launcher::{Launcher, SystemLauncher};
pub use resolver::Resolver;

use std::path::PathBuf;

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user left the selector or the prompt without choosing
    Cancelled,
    /// A URL was handed to the browser
    Browsed(String),
    /// A downloaded file was opened
    OpenedFile(PathBuf),
    /// Citation text, to be printed by the caller
    Exported(String),
    /// The user chose to do nothing
    Nothing,
}
