use std::io::IsTerminal;
use std::path::Path;

use crate::app::AppContext;
use crate::cli::BackupArgs;
use crate::errors::CliError;
use crate::ui::format_bytes;

pub fn handle_backup(ctx: &AppContext, args: &BackupArgs) -> anyhow::Result<()> {
    let destination = Path::new(&args.destination);
    let store = ctx.open_store()?;
    if store
        .path()
        .is_some_and(|db| tally_core::fs::same_file(db, destination))
    {
        return Err(CliError::invalid_input("Backup destination is the database itself").into());
    }

    if std::io::stdin().is_terminal() && !ctx.quiet() {
        let prompt = if destination.exists() {
            format!("Overwrite {} with a backup?", args.destination)
        } else {
            format!("Back up database to {}?", args.destination)
        };
        let proceed = dialoguer::Confirm::new()
            .with_prompt(prompt)
            .default(true)
            .interact()?;
        if !proceed {
            return Err(anyhow::anyhow!("Backup cancelled"));
        }
    }

    let bytes = store.backup_to(destination)?;
    if bytes == 0 {
        return Err(anyhow::anyhow!("Backup failed: zero bytes written"));
    }
    if !ctx.quiet() {
        println!(
            "Backed up database to {} ({})",
            args.destination,
            format_bytes(bytes)
        );
    }
    Ok(())
}
