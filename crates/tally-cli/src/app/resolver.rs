//! Path resolution for config and database files.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::config::{default_config_path, read_config, TallyConfig};
use crate::errors::CliError;

/// Resolve the config file path, checking TALLY_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("TALLY_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file if one exists.
pub fn load_config() -> anyhow::Result<Option<TallyConfig>> {
    let config_path = resolve_config_path()?;
    if !config_path.exists() {
        log::debug!("No config at {}", config_path.display());
        return Ok(None);
    }
    read_config(&config_path).map(Some)
}

/// Resolve the database path from CLI args or config.
pub fn resolve_db_path(cli: &Cli, config: Option<&TallyConfig>) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.db.as_ref() {
        return Ok(PathBuf::from(path));
    }

    match config {
        Some(config) => Ok(PathBuf::from(&config.store.path)),
        None => {
            let config_path = resolve_config_path()?;
            Err(CliError::not_found(
                missing_config_message(&config_path),
                "Hint: Run `tally init` first.",
            )
            .into())
        }
    }
}

/// Error message when the database file is missing.
pub fn missing_db_message(path: &Path) -> String {
    format!(
        "No database found at {}\n\nRun:\n  tally init\n\nOr specify a database path:\n  TALLY_PATH=/path/to/tally.db tally init",
        path.display()
    )
}

/// Error message when the config file is missing.
pub fn missing_config_message(config_path: &Path) -> String {
    format!(
        "No config found at {}\n\nRun:\n  tally init\n\nOr specify a database path:\n  TALLY_PATH=/path/to/tally.db tally init",
        config_path.display()
    )
}
