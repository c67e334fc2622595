//! fuzzy-ads CLI application entry point
//!
//! Searches ADS, lets the user fuzzy-select one paper and then opens,
//! downloads or cites it.
//!
//! # Usage
//!
//! ```bash
//! # Papers by an author in a given year
//! fuzzy-ads -a "Smith, J." -y 2020
//!
//! # First-author search with a raw query on top
//! fuzzy-ads --fa "Doe, A." -q "dust AND grains"
//!
//! # More logging on stderr
//! fuzzy-ads -vv -a "Smith, J."
//! ```
//!
//! # Configuration
//!
//! Optional TOML file in the user's config directory
//! (`~/.config/fuzzy-ads/config.toml` on Linux), overridable with
//! `FUZZY_ADS_*` environment variables. The API token is taken from the
//! config, `ADS_API_TOKEN`, `ADS_DEV_KEY` or `~/.ads/dev_key`.

use clap::{CommandFactory, Parser};
use fuzzy_ads::{
    FadsError, Result,
    actions::{Outcome, Resolver, SystemLauncher},
    cli::Cli,
    config::{FadsConfig, Settings, terminal_width},
    download::DownloadManager,
    query::{self, AdsClient},
    session,
    ui::{DialoguerInput, FzfFinder, OutputWriter, StdoutWriter, UiError},
};
use std::process::ExitCode;
use tracing::{debug, info};

const SELECTOR_HOMEPAGE: &str = "https://github.com/junegunn/fzf";

fn init_tracing(default_level: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<FadsConfig> {
    match &cli.config {
        Some(path) if !path.is_file() => Err(FadsError::InvalidInput(format!(
            "config file {} does not exist",
            path.display()
        ))),
        Some(path) => Ok(FadsConfig::load_from(path)?),
        None => Ok(FadsConfig::load()?),
    }
}

fn run(cli: &Cli, output: &dyn OutputWriter) -> Result<()> {
    let fields = cli.query_fields();
    if fields.is_empty() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let config = load_config(cli)?;
    let settings = Settings::resolve(&config, terminal_width());
    debug!(
        api = %settings.api_url,
        selector = %settings.selector,
        has_token = settings.token.is_some(),
        "settings resolved"
    );

    let finder = match FzfFinder::locate(&settings.selector) {
        Ok(finder) => finder,
        Err(UiError::SelectorNotFound(name)) => {
            output.write(&format!(
                "Missing dependency: {name}. See {SELECTOR_HOMEPAGE} for install instructions."
            ));
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let request = query::build_request(fields, &settings)?;
    info!(q = %request.to_query_string(), "query built");
    let client = AdsClient::from_settings(&settings)?;
    let records = query::execute(&client, &request)?;

    let input = DialoguerInput::new();
    let launcher = SystemLauncher;
    let downloads = DownloadManager::new(settings.timeout, settings.show_progress)?;
    let resolver = Resolver::new(&settings, &client, &input, output, &launcher, &downloads);

    match session::run(&settings, &records, &finder, &resolver)? {
        Outcome::Exported(text) => {
            output.write("");
            output.write(&text);
        }
        Outcome::Browsed(url) => info!(%url, "opened in browser"),
        Outcome::OpenedFile(path) => info!(path = %path.display(), "opened file"),
        Outcome::Cancelled | Outcome::Nothing => {}
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level());

    let output = StdoutWriter::new();
    match run(&cli, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output.error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
