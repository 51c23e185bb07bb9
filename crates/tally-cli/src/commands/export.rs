use tally_core::LedgerStore;

use crate::app::AppContext;
use crate::cli::{ExportArgs, ExportFormat};
use crate::helpers::parse_date;
use crate::output::{category_lookup, expenses_json};

pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let expenses = match (args.since.as_deref(), args.until.as_deref()) {
        (Some(since), Some(until)) => {
            store.list_expenses_by_date_range(parse_date(since)?, parse_date(until)?)?
        }
        _ => store.list_expenses(None)?,
    };
    let values = expenses_json(&expenses, &category_lookup(&store)?);

    match args.format {
        ExportFormat::Json => println!("{}", serde_json::to_string_pretty(&values)?),
        ExportFormat::Jsonl => {
            for value in values {
                println!("{}", serde_json::to_string(&value)?);
            }
        }
    }
    Ok(())
}
