//! Scripted UI backends for testing

use super::error::Result;
use super::input::{self, InputError, UserInput};
use super::traits::{FinderConfig, FuzzyFinder};
use super::types::FinderResult;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Mock fuzzy finder that returns a predetermined line
///
/// The configuration it was last run with is kept for inspection.
#[derive(Debug, Default)]
pub struct MockFinder {
    /// Line to return, or `None` to simulate the user aborting
    pub predetermined_selection: Option<String>,
    last_config: RefCell<Option<FinderConfig>>,
}

impl MockFinder {
    /// Always select `selection`, whatever candidates are offered
    #[must_use]
    pub fn new(selection: impl Into<String>) -> Self {
        Self {
            predetermined_selection: Some(selection.into()),
            last_config: RefCell::new(None),
        }
    }

    /// Create a mock finder that simulates user abort
    #[must_use]
    pub fn aborted() -> Self {
        Self::default()
    }

    /// Configuration passed to the most recent `run`
    #[must_use]
    pub fn last_config(&self) -> Option<FinderConfig> {
        self.last_config.borrow().clone()
    }
}

impl FuzzyFinder for MockFinder {
    fn run(&self, config: FinderConfig) -> Result<FinderResult> {
        self.last_config.replace(Some(config));
        Ok(self
            .predetermined_selection
            .clone()
            .map_or_else(FinderResult::aborted, FinderResult::selected))
    }
}

/// User input that replays a fixed list of answers
///
/// Runs out with `Ok(None)`, like a closed stdin.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    answers: RefCell<VecDeque<String>>,
    prompts: RefCell<Vec<String>>,
}

impl ScriptedInput {
    #[must_use]
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: RefCell::new(answers.into_iter().map(Into::into).collect()),
            prompts: RefCell::new(Vec::new()),
        }
    }

    /// Number of prompts shown so far
    #[must_use]
    pub fn prompt_count(&self) -> usize {
        self.prompts.borrow().len()
    }

    /// Prompt texts shown so far
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl UserInput for ScriptedInput {
    fn prompt_text(&self, prompt: &str) -> input::Result<Option<String>> {
        self.prompts.borrow_mut().push(prompt.to_string());
        Ok(self.answers.borrow_mut().pop_front())
    }
}

/// User input that fails the test if it is ever consulted
#[derive(Debug, Default)]
pub struct UnreachableInput;

impl UserInput for UnreachableInput {
    fn prompt_text(&self, prompt: &str) -> input::Result<Option<String>> {
        panic!("unexpected prompt: {prompt}");
    }
}

/// Input that reports a cancelled prompt
#[derive(Debug, Default)]
pub struct CancelledInput;

impl UserInput for CancelledInput {
    fn prompt_text(&self, _prompt: &str) -> input::Result<Option<String>> {
        Err(InputError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_finder_with_selection() {
        let finder = MockFinder::new("b: x :t");
        let result = finder.run(FinderConfig::new(vec!["b: x :t".into()])).unwrap();

        assert!(!result.is_aborted());
        assert_eq!(result.selected.as_deref(), Some("b: x :t"));
        assert_eq!(finder.last_config().unwrap().items.len(), 1);
    }

    #[test]
    fn test_mock_finder_aborted() {
        let finder = MockFinder::aborted();
        let result = finder.run(FinderConfig::new(vec![])).unwrap();
        assert!(result.is_aborted());
    }

    #[test]
    fn test_scripted_input_replays_then_runs_dry() {
        let input = ScriptedInput::new(["1", "e"]);
        assert_eq!(input.prompt_text("p").unwrap().as_deref(), Some("1"));
        assert_eq!(input.prompt_text("p").unwrap().as_deref(), Some("e"));
        assert_eq!(input.prompt_text("p").unwrap(), None);
        assert_eq!(input.prompt_count(), 3);
    }
}
