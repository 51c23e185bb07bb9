use tally_core::summary::overview;

use crate::app::AppContext;
use crate::cli::SummaryArgs;
use crate::output::{overview_json, print_overview};
use crate::ui::{blank_line, header, print};

pub fn handle_summary(ctx: &AppContext, args: &SummaryArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref())?;
    let top = args.top.unwrap_or(ctx.ui()?.summary_top);
    let store = ctx.open_store()?;
    let overview = overview(&store)?;

    if ui_ctx.mode.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&overview_json(&overview, top))?
        );
        return Ok(());
    }

    if !ctx.quiet() && ui_ctx.mode.is_pretty() {
        let month = ctx.today()?.format("%Y-%m").to_string();
        print(&ui_ctx, &header(&ui_ctx, "summary", Some(&month)));
        blank_line(&ui_ctx);
    }
    print_overview(&ui_ctx, &overview, top, &ctx.currency()?);
    Ok(())
}
