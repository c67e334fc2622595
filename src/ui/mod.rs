//! UI abstraction layer
//!
//! Interactive selection, prompting and status output sit behind traits so
//! the pipeline can be driven by scripted backends in tests.
//!
//! # Core Traits
//!
//! - **`FuzzyFinder`** - Pick one formatted line from a candidate list
//! - **`UserInput`** - Text prompts for the action menu
//! - **`OutputWriter`** - Status messages with severity levels
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Pipeline                           │
//! │   (session, actions, download)          │
//! └────────────────┬────────────────────────┘
//!                  │ Uses traits
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │      UI Trait Abstraction               │
//! │  (FuzzyFinder, UserInput, OutputWriter) │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ Terminal      │  │ Test doubles      │
//! │ - FzfFinder   │  │ - MockFinder      │
//! │ - Dialoguer   │  │ - ScriptedInput   │
//! │ - Stdout      │  │ - BufferWriter    │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! ## Implementing a Custom Finder
//!
//! ```no_run
//! use fuzzy_ads::ui::{FuzzyFinder, FinderConfig, FinderResult, Result};
//!
//! struct FirstLine;
//!
//! impl FuzzyFinder for FirstLine {
//!     fn run(&self, config: FinderConfig) -> Result<FinderResult> {
//!         Ok(config
//!             .items
//!             .into_iter()
//!             .next()
//!             .map_or_else(FinderResult::aborted, FinderResult::selected))
//!     }
//! }
//! ```
//!
//! ## Output Messages
//!
//! ```
//! use fuzzy_ads::ui::output::{OutputWriter, StdoutWriter};
//!
//! let output = StdoutWriter::new();
//! output.success("Saved article to /tmp/2020ApJ...900..123S_PUB.pdf");
//! output.warning("Invalid choice");
//! ```

mod error;
mod traits;
mod types;

pub mod fzf;
pub mod input;
pub mod output;

#[cfg(test)]
pub mod mock;

pub use error::{Result, UiError};
pub use fzf::FzfFinder;
pub use input::{DialoguerInput, InputError, UserInput};
pub use output::{BufferWriter, MessageLevel, OutputWriter, StdoutWriter};
pub use traits::{FinderConfig, FuzzyFinder, PreviewConfig};
pub use types::FinderResult;
