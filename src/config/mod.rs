//! Configuration module for fuzzy-ads
//!
//! Settings are layered: built-in defaults, then the TOML file in the user's
//! config directory (`~/.config/fuzzy-ads/config.toml` on Linux), then
//! `FUZZY_ADS_*` environment variables. The merged [`FadsConfig`] is turned
//! once into an immutable [`Settings`] value that every component borrows.

mod settings;

pub use settings::{Settings, terminal_width};

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Prefix for environment overrides, e.g. `FUZZY_ADS_SELECTOR=sk`
pub const ENV_PREFIX: &str = "FUZZY_ADS";

/// Environment variables checked for an API token, in order
pub const TOKEN_ENV_VARS: &[&str] = &["ADS_API_TOKEN", "ADS_DEV_KEY"];

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct FadsConfig {
    /// Base URL of the ADS API
    pub api_url: String,

    /// Base URL of the ADS web interface (abstract pages, link gateway)
    pub ui_url: String,

    /// API token; falls back to the environment and `~/.ads/dev_key`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Selector program, looked up on `PATH`
    pub selector: String,

    /// Upper bound on returned rows
    pub rows: u32,

    /// Sort clause passed to the backend
    pub sort: String,

    /// Citation export format
    pub export_format: String,

    /// HTTP timeout for API calls, in seconds
    pub timeout_secs: u64,

    /// Where downloaded articles are cached (system temp dir if unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<PathBuf>,

    /// Where the selector's reload files are written (system temp dir if unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scratch_dir: Option<PathBuf>,

    /// Draw a progress bar while downloading
    pub show_progress: bool,
}

impl Default for FadsConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.adsabs.harvard.edu/v1".to_string(),
            ui_url: "https://ui.adsabs.harvard.edu".to_string(),
            token: None,
            selector: "fzf".to_string(),
            rows: 1000,
            sort: "year desc".to_string(),
            export_format: "bibtex".to_string(),
            timeout_secs: 30,
            download_dir: None,
            scratch_dir: None,
            show_progress: true,
        }
    }
}

impl FadsConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("fuzzy-ads").join("config.toml"))
    }

    /// Load configuration from the default location, creating it on first run
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be determined or
    /// the file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_or_create(&Self::config_path()?)
    }

    /// Load from `path`, first writing the defaults there if it is missing
    ///
    /// Failing to write the default file only logs a warning; the defaults
    /// are still used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or an override cannot be parsed.
    pub fn load_or_create(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            match Self::default().save_to(path) {
                Ok(()) => info!(path = %path.display(), "wrote default config"),
                Err(e) => warn!(path = %path.display(), error = %e, "could not write default config"),
            }
        }
        Self::load_from(path)
    }

    /// Load configuration from `path`, layering environment overrides on top
    ///
    /// A missing file is not an error; defaults are used instead.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file or an override cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the parent directory cannot be created, the
    /// configuration cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Find an API token: config value, then environment, then `~/.ads/dev_key`
    #[must_use]
    pub fn resolve_token(&self) -> Option<String> {
        self.resolve_token_with(|name| std::env::var(name).ok(), dirs::home_dir().as_deref())
    }

    /// Token lookup with injectable environment and home directory
    pub fn resolve_token_with<F>(&self, env: F, home: Option<&Path>) -> Option<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |s: String| {
            let s = s.trim().to_string();
            (!s.is_empty()).then_some(s)
        };

        self.token
            .clone()
            .and_then(non_empty)
            .or_else(|| TOKEN_ENV_VARS.iter().find_map(|name| env(name).and_then(non_empty)))
            .or_else(|| {
                let key_file = home?.join(".ads").join("dev_key");
                let contents = fs::read_to_string(key_file).ok()?;
                contents.lines().next().map(ToString::to_string).and_then(non_empty)
            })
    }
}
