use tally_core::LedgerStore;

use crate::app::AppContext;
use crate::errors::CliError;
use crate::ui::{badge, Badge};

pub fn handle_check(ctx: &AppContext) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    match store.check_integrity() {
        Ok(()) => {
            if !ctx.quiet() {
                let metadata = store.metadata()?;
                println!("Integrity check: OK");
                println!("- foreign keys: OK");
                println!("- categories: {}", metadata.category_count);
                println!("- expenses: {}", metadata.expense_count);
            }
            Ok(())
        }
        Err(err) => {
            let ui_ctx = ctx.ui_context(false, None)?;
            eprintln!("{}", badge(&ui_ctx, Badge::Err, "Integrity check: FAILED"));
            eprintln!("- error: {}", err);
            Err(CliError::integrity_failed("Integrity check failed").into())
        }
    }
}
