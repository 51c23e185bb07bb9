use std::path::PathBuf;

use tally_core::LedgerStore;
use tally_core::SqliteStore;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_db_path, write_config, TallyConfig};
use crate::errors::CliError;
use crate::ui::{blank_line, hint, print, receipt};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(false, None)?;

    let db_path = match args.path.clone().or_else(|| ctx.cli().db.clone()) {
        Some(value) => PathBuf::from(value),
        None => default_db_path()?,
    };
    let config_path = match args.config_path.as_ref() {
        Some(value) => PathBuf::from(value),
        None => resolve_config_path()?,
    };

    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input_with_hint(
            format!("Config already exists at {}", config_path.display()),
            "Hint: Use `tally init --force` to overwrite it.",
        )
        .into());
    }

    tally_core::fs::prepare_parent(&db_path)?;
    let mut store = SqliteStore::open(&db_path)?;
    store.initialize()?;
    let metadata = store.metadata()?;
    store.close()?;
    log::info!("Initialized store at {}", db_path.display());

    write_config(&config_path, &TallyConfig::new(db_path.clone()))?;

    if !ctx.quiet() {
        let db_display = db_path.display().to_string();
        let config_display = config_path.display().to_string();
        let categories = metadata.category_count.to_string();
        let expenses = metadata.expense_count.to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Tally is ready",
                &[
                    ("Database", db_display.as_str()),
                    ("Config", config_display.as_str()),
                    ("Categories", categories.as_str()),
                    ("Expenses", expenses.as_str()),
                ],
            ),
        );
        if ui_ctx.mode.is_pretty() {
            blank_line(&ui_ctx);
            print(
                &ui_ctx,
                &hint(
                    &ui_ctx,
                    "tally add 12,50 \"Lunch\" -c 1  \u{00B7}  tally summary  \u{00B7}  tally --help",
                ),
            );
        }
    }

    Ok(())
}
