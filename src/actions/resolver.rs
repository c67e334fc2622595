//! Prompting for and carrying out the action on a selected article

use super::choice::{ActionChoice, PROMPT, render_options, render_record};
use super::error::ActionError;
use super::launcher::Launcher;
use super::Outcome;
use crate::config::Settings;
use crate::download::{DownloadManager, DownloadTarget, FetchStatus, human_size};
use crate::query::{ArticleRecord, SearchBackend};
use crate::ui::{InputError, OutputWriter, UserInput};
use std::ffi::OsStr;
use tracing::{debug, info};

/// Everything needed to act on one selected article
pub struct Resolver<'a> {
    settings: &'a Settings,
    backend: &'a dyn SearchBackend,
    input: &'a dyn UserInput,
    output: &'a dyn OutputWriter,
    launcher: &'a dyn Launcher,
    downloads: &'a DownloadManager,
}

impl<'a> Resolver<'a> {
    #[must_use]
    pub fn new(
        settings: &'a Settings,
        backend: &'a dyn SearchBackend,
        input: &'a dyn UserInput,
        output: &'a dyn OutputWriter,
        launcher: &'a dyn Launcher,
        downloads: &'a DownloadManager,
    ) -> Self {
        Self {
            settings,
            backend,
            input,
            output,
            launcher,
            downloads,
        }
    }

    /// Show the menu for `record`, read a choice and act on it
    ///
    /// # Errors
    ///
    /// Returns an [`ActionError`] if reading input, exporting, downloading
    /// or launching fails.
    pub fn resolve(&self, record: &ArticleRecord) -> Result<Outcome, ActionError> {
        match self.choose(record)? {
            Some(choice) => self.execute(record, choice),
            None => Ok(Outcome::Cancelled),
        }
    }

    /// Prompt until a valid answer is given
    ///
    /// Returns `None` if input runs out or the prompt is cancelled.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Input`] on an I/O failure while reading.
    pub fn choose(&self, record: &ArticleRecord) -> Result<Option<ActionChoice>, ActionError> {
        self.output.write("");
        self.output.write(&render_record(record));
        self.output.write("");
        self.output
            .write(&render_options(record, &self.settings.export_format));

        let source_count = record.sources().len();
        loop {
            let answer = match self.input.prompt_text(PROMPT) {
                Ok(Some(answer)) => answer,
                Ok(None) | Err(InputError::Cancelled) => return Ok(None),
                Err(e) => return Err(e.into()),
            };

            if let Some(choice) = ActionChoice::parse(&answer, source_count) {
                debug!(?choice, bibcode = %record.bibcode, "action chosen");
                return Ok(Some(choice));
            }
            self.output
                .warning(&format!("Invalid choice '{}'", answer.trim()));
        }
    }

    /// Carry out an already-chosen action
    ///
    /// # Errors
    ///
    /// Returns an [`ActionError`] if exporting, downloading or launching
    /// fails, or [`ActionError::NoSuchSource`] for an index the record does
    /// not list.
    pub fn execute(
        &self,
        record: &ArticleRecord,
        choice: ActionChoice,
    ) -> Result<Outcome, ActionError> {
        match choice {
            ActionChoice::Source(index) => {
                let source = record.sources().get(index).ok_or_else(|| {
                    ActionError::NoSuchSource {
                        bibcode: record.bibcode.clone(),
                        index,
                    }
                })?;
                self.retrieve(record, source)
            }
            ActionChoice::OpenAbstract => {
                let url = self.settings.abstract_url(&record.bibcode);
                self.launch(&url)?;
                Ok(Outcome::Browsed(url))
            }
            ActionChoice::Export => {
                let text = self
                    .backend
                    .export(&record.bibcode, &self.settings.export_format)?;
                Ok(Outcome::Exported(text))
            }
            ActionChoice::Nothing => Ok(Outcome::Nothing),
        }
    }

    fn retrieve(&self, record: &ArticleRecord, source: &str) -> Result<Outcome, ActionError> {
        let url = self.settings.gateway_url(&record.bibcode, source);

        if source.contains("HTML") {
            self.launch(&url)?;
            return Ok(Outcome::Browsed(url));
        }

        let target = DownloadTarget::new(&self.settings.download_dir, &record.bibcode, source);
        if !target.exists() {
            self.output
                .write(&format!("Retrieving article from {source}.."));
        }

        let path = target.path();
        match self.downloads.fetch(&url, &target)? {
            FetchStatus::Downloaded { bytes } => self.output.success(&format!(
                "Saved article to {} ({})",
                path.display(),
                human_size(bytes)
            )),
            FetchStatus::Cached => info!(path = %path.display(), "reusing downloaded article"),
        }

        self.launch(path.as_os_str())?;
        Ok(Outcome::OpenedFile(path.to_path_buf()))
    }

    fn launch(&self, target: impl AsRef<OsStr>) -> Result<(), ActionError> {
        let target = target.as_ref();
        self.launcher
            .open(target)
            .map_err(|source| ActionError::Launch {
                target: target.to_string_lossy().into_owned(),
                source,
            })
    }
}
