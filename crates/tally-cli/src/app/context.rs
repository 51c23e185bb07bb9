//! Application context for the Tally CLI.
//!
//! Bundles CLI arguments with the lazily-loaded config file.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use once_cell::unsync::OnceCell;

use tally_core::clock::FixedClock;
use tally_core::{LedgerStore, SqliteStore};

use crate::cli::Cli;
use crate::config::{TallyConfig, UiSection};
use crate::errors::CliError;
use crate::helpers::{parse_date, parse_output_format};
use crate::output::Currency;
use crate::ui::UiContext;

use super::resolver::{load_config, missing_db_message, resolve_db_path};

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<TallyConfig>>,
    default_ui: UiSection,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
            default_ui: UiSection::default(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the config file contents, loading them lazily if needed.
    pub fn config(&self) -> anyhow::Result<Option<&TallyConfig>> {
        Ok(self.config.get_or_try_init(load_config)?.as_ref())
    }

    /// UI preferences from config, or defaults when no config exists.
    pub fn ui(&self) -> anyhow::Result<&UiSection> {
        Ok(self
            .config()?
            .map(|config| &config.ui)
            .unwrap_or(&self.default_ui))
    }

    /// Build the UI context for a command's `--json`/`--format` flags.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> anyhow::Result<UiContext> {
        let format = parse_output_format(format)?;
        Ok(UiContext::from_env(
            json,
            format,
            self.cli.no_color,
            self.cli.ascii,
        ))
    }

    /// Currency used when rendering amounts.
    pub fn currency(&self) -> anyhow::Result<Currency> {
        Ok(Currency::new(self.ui()?.currency_symbol.clone()))
    }

    /// Resolved database path.
    pub fn db_path(&self) -> anyhow::Result<PathBuf> {
        resolve_db_path(self.cli, self.config()?)
    }

    /// Today's date, honouring the hidden `--today` override.
    pub fn today(&self) -> anyhow::Result<NaiveDate> {
        match self.cli.today.as_deref() {
            Some(value) => parse_date(value),
            None => Ok(Local::now().date_naive()),
        }
    }

    /// Open and initialize the store at the resolved path.
    ///
    /// The database must already exist; `tally init` creates it.
    pub fn open_store(&self) -> anyhow::Result<SqliteStore> {
        let path = self.db_path()?;
        if !path.exists() {
            return Err(CliError::not_found(
                missing_db_message(&path),
                "Hint: Run `tally init` to create it.",
            )
            .into());
        }

        // One date for the whole invocation, even across midnight.
        let mut store = SqliteStore::open(&path)?.with_clock(FixedClock(self.today()?));
        store.initialize()?;
        Ok(store)
    }
}
