use tally_core::storage::NewExpense;
use tally_core::LedgerStore;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::errors::CliError;
use crate::helpers::{parse_amount, parse_date, parse_description, prompt_category, resolve_category};
use crate::ui::{print, receipt};

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    // Validate before touching the store.
    let amount = parse_amount(&args.amount)?;
    let description = parse_description(&args.description)?;
    let date = match args.date.as_deref() {
        Some(value) => parse_date(value)?,
        None => ctx.today()?,
    };

    let ui_ctx = ctx.ui_context(false, None)?;
    let mut store = ctx.open_store()?;
    let interactive = ui_ctx.is_interactive() && !args.no_input;
    let category = match args.category.as_deref() {
        Some(raw) => resolve_category(&store, raw)?,
        None if interactive => prompt_category(&store)?,
        None => {
            return Err(CliError::invalid_input_with_hint(
                "No category given",
                "Hint: Pass --category <ID|NAME>.",
            )
            .into())
        }
    };

    let id = store.add_expense(&NewExpense::new(amount, description.clone(), category.id, date))?;
    log::debug!("Added expense {} in category {}", id, category.id);

    if !ctx.quiet() {
        let currency = ctx.currency()?;
        let id_text = id.to_string();
        let amount_text = currency.format(amount);
        let date_text = date.format("%Y-%m-%d").to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Added expense",
                &[
                    ("ID", id_text.as_str()),
                    ("Amount", amount_text.as_str()),
                    ("Description", description.as_str()),
                    ("Category", category.name.as_str()),
                    ("Date", date_text.as_str()),
                ],
            ),
        );
    }

    store.close()?;
    Ok(())
}
