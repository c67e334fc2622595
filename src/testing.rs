//! Testing utilities for fuzzy-ads
//!
//! Shared fixtures: sample records, settings rooted in a temporary
//! directory, an in-memory search backend and a launcher that records what
//! it was asked to open.
//!
//! Only available when compiled with `cfg(test)`.

use crate::actions::Launcher;
use crate::config::{FadsConfig, Settings};
use crate::query::{ArticleRecord, OPEN_ACCESS, QueryError, QueryRequest, REFEREED, SearchBackend};
use std::cell::{Cell, RefCell};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use tempfile::TempDir;

/// Two 2020 papers by Smith: one refereed and open access with three
/// sources and a DOI, one with no tags, sources or DOI
#[must_use]
pub fn sample_records() -> Vec<ArticleRecord> {
    vec![
        ArticleRecord::new(
            "2020ApJ...900..123S",
            vec!["Smith, J.".into(), "Doe, A.".into()],
            "Dust in the wind",
        )
        .with_properties([REFEREED, OPEN_ACCESS])
        .with_esources(["PUB_PDF", "EPRINT_PDF", "PUB_HTML"])
        .with_doi("10.3847/1538-4357/abcdef"),
        ArticleRecord::new(
            "2020MNRAS.500..456S",
            vec!["Smith, K.".into()],
            "A note on things",
        ),
    ]
}

/// Settings with scratch and download directories inside a fresh temp dir
///
/// Both directories exist. Keep the returned `TempDir` alive for the
/// duration of the test.
///
/// # Panics
/// Panics if the temporary directories cannot be created.
#[must_use]
pub fn test_settings() -> (Settings, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let download_dir = dir.path().join("downloads");
    let scratch_dir = dir.path().join("scratch");
    fs::create_dir_all(&download_dir).expect("Failed to create download dir");
    fs::create_dir_all(&scratch_dir).expect("Failed to create scratch dir");

    let config = FadsConfig {
        token: Some("test-token".into()),
        download_dir: Some(download_dir),
        scratch_dir: Some(scratch_dir),
        show_progress: false,
        ..FadsConfig::default()
    };

    (Settings::resolve(&config, 40), dir)
}

/// In-memory backend returning fixed records
///
/// Counts searches and records export requests.
#[derive(Debug, Default)]
pub struct StaticBackend {
    records: Vec<ArticleRecord>,
    failure: Option<(u16, String)>,
    searches: Cell<usize>,
    exports: RefCell<Vec<(String, String)>>,
}

impl StaticBackend {
    #[must_use]
    pub fn new(records: Vec<ArticleRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Backend whose every call fails with an API error
    #[must_use]
    pub fn failing(status: u16, message: &str) -> Self {
        Self {
            failure: Some((status, message.to_string())),
            ..Self::default()
        }
    }

    /// Number of searches executed
    #[must_use]
    pub fn searches(&self) -> usize {
        self.searches.get()
    }

    /// `(bibcode, format)` for each export requested
    #[must_use]
    pub fn exports(&self) -> Vec<(String, String)> {
        self.exports.borrow().clone()
    }

    fn check(&self) -> Result<(), QueryError> {
        match &self.failure {
            Some((status, message)) => Err(QueryError::Api {
                status: *status,
                message: message.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl SearchBackend for StaticBackend {
    fn search(&self, _request: &QueryRequest) -> Result<Vec<ArticleRecord>, QueryError> {
        self.searches.set(self.searches.get() + 1);
        self.check()?;
        Ok(self.records.clone())
    }

    fn export(&self, bibcode: &str, format: &str) -> Result<String, QueryError> {
        self.exports
            .borrow_mut()
            .push((bibcode.to_string(), format.to_string()));
        self.check()?;
        Ok(format!("@ARTICLE{{{bibcode},\n}}"))
    }
}

/// Launcher that remembers targets instead of opening them
#[derive(Debug, Default)]
pub struct RecordingLauncher {
    opened: RefCell<Vec<OsString>>,
    fail: bool,
}

impl RecordingLauncher {
    /// Launcher that fails every call
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Targets opened so far, lossily converted to strings
    #[must_use]
    pub fn opened(&self) -> Vec<String> {
        self.opened
            .borrow()
            .iter()
            .map(|t| t.to_string_lossy().into_owned())
            .collect()
    }
}

impl Launcher for RecordingLauncher {
    fn open(&self, target: &OsStr) -> io::Result<()> {
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no handler"));
        }
        self.opened.borrow_mut().push(target.to_os_string());
        Ok(())
    }
}
