use tally_core::storage::NewCategory;
use tally_core::LedgerStore;

use crate::app::AppContext;
use crate::cli::{CategoriesAddArgs, CategoriesListArgs};
use crate::errors::CliError;
use crate::output::{categories_json, print_category_list};
use crate::ui::{print, receipt};

pub fn handle_categories_list(ctx: &AppContext, args: &CategoriesListArgs) -> anyhow::Result<()> {
    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref())?;
    let store = ctx.open_store()?;
    let categories = store.list_categories()?;

    if ui_ctx.mode.is_json() {
        println!(
            "{}",
            serde_json::to_string_pretty(&categories_json(&categories))?
        );
    } else {
        print_category_list(&ui_ctx, &categories);
    }
    Ok(())
}

pub fn handle_categories_add(ctx: &AppContext, args: &CategoriesAddArgs) -> anyhow::Result<()> {
    let name = args.name.trim();
    if name.is_empty() {
        return Err(CliError::invalid_input("Category name must not be empty").into());
    }

    let mut store = ctx.open_store()?;
    let id = store.add_category(&NewCategory::new(name, args.color.trim(), args.icon.trim()))?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None)?;
        let id_text = id.to_string();
        print(
            &ui_ctx,
            &receipt(&ui_ctx, "Added category", &[("ID", id_text.as_str()), ("Name", name)]),
        );
    }

    store.close()?;
    Ok(())
}
