use tally_core::LedgerStore;

use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::errors::CliError;
use crate::helpers::{parse_date, resolve_category};
use crate::output::{category_lookup, expenses_json, print_expense_list};
use crate::ui::{blank_line, header, print};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref())?;
    let store = ctx.open_store()?;

    let (expenses, context) = if args.month {
        (store.current_month_expenses()?, "this month".to_string())
    } else if let (Some(since), Some(until)) = (args.since.as_deref(), args.until.as_deref()) {
        let start = parse_date(since)?;
        let end = parse_date(until)?;
        if start > end {
            return Err(CliError::invalid_input(format!(
                "--since {} is after --until {}",
                start, end
            ))
            .into());
        }
        (
            store.list_expenses_by_date_range(start, end)?,
            format!("{} to {}", start, end),
        )
    } else if let Some(raw) = args.category.as_deref() {
        let category = resolve_category(&store, raw)?;
        (
            store.list_expenses_by_category(category.id)?,
            category.name,
        )
    } else {
        let limit = if args.all {
            None
        } else {
            Some(args.limit.unwrap_or(ctx.ui()?.recent_limit))
        };
        let context = match limit {
            Some(n) => format!("latest {}", n),
            None => "all".to_string(),
        };
        (store.list_expenses(limit)?, context)
    };

    let lookup = category_lookup(&store)?;
    if ui_ctx.mode.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&expenses_json(&expenses, &lookup))?
        );
        return Ok(());
    }

    if !ctx.quiet() && ui_ctx.mode.is_pretty() {
        print(&ui_ctx, &header(&ui_ctx, "list", Some(&context)));
        blank_line(&ui_ctx);
    }
    print_expense_list(&ui_ctx, &expenses, &lookup, &ctx.currency()?);
    Ok(())
}
