//! Text and table output formatting.

use std::collections::HashMap;

use tally_core::storage::{Category, CategoryId, Expense};
use tally_core::summary::SpendingOverview;
use tally_core::{LedgerStore, Money};

use crate::ui::theme::{styled, styles};
use crate::ui::{
    blank_line, format_currency, format_percentage, kv, print, simple_table, table, truncate,
    Column, UiContext,
};

const DESCRIPTION_WIDTH: usize = 40;

/// Currency symbol carried from config into renderers.
#[derive(Debug, Clone)]
pub struct Currency {
    pub symbol: String,
}

impl Currency {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
        }
    }

    pub fn format(&self, amount: Money) -> String {
        format_currency(amount, &self.symbol)
    }
}

/// Build a map of category ID -> category for display.
pub fn category_lookup<S: LedgerStore + ?Sized>(
    store: &S,
) -> anyhow::Result<HashMap<CategoryId, Category>> {
    Ok(store
        .list_categories()?
        .into_iter()
        .map(|category| (category.id, category))
        .collect())
}

fn category_label(ctx: &UiContext, lookup: &HashMap<CategoryId, Category>, id: CategoryId) -> String {
    match lookup.get(&id) {
        Some(category) if ctx.mode.is_pretty() => format!("{} {}", category.icon, category.name),
        Some(category) => category.name.clone(),
        None => format!("#{}", id),
    }
}

pub fn print_expense_list(
    ctx: &UiContext,
    expenses: &[Expense],
    lookup: &HashMap<CategoryId, Category>,
    currency: &Currency,
) {
    if expenses.is_empty() {
        print(ctx, "No expenses found.");
        return;
    }

    let columns = [
        Column::new("ID"),
        Column::new("Date"),
        Column::new("Category"),
        Column::new("Description"),
        Column::numeric("Amount"),
    ];
    let rows: Vec<Vec<String>> = expenses
        .iter()
        .map(|expense| {
            vec![
                expense.id.to_string(),
                expense.date.format("%Y-%m-%d").to_string(),
                category_label(ctx, lookup, expense.category_id),
                if ctx.mode.is_pretty() {
                    truncate(&expense.description, DESCRIPTION_WIDTH)
                } else {
                    expense.description.clone()
                },
                currency.format(expense.amount),
            ]
        })
        .collect();

    print(ctx, &simple_table(ctx, &columns, &rows));
}

pub fn print_category_list(ctx: &UiContext, categories: &[Category]) {
    if categories.is_empty() {
        print(ctx, "No categories found.");
        return;
    }

    let columns = [
        Column::new("ID"),
        Column::new("Icon"),
        Column::new("Name"),
        Column::new("Color"),
    ];
    let rows: Vec<Vec<String>> = categories
        .iter()
        .map(|category| {
            vec![
                category.id.to_string(),
                category.icon.clone(),
                category.name.clone(),
                category.color.clone(),
            ]
        })
        .collect();

    print(ctx, &simple_table(ctx, &columns, &rows));
}

/// Totals followed by the `top` category breakdown.
pub fn print_overview(ctx: &UiContext, overview: &SpendingOverview, top: usize, currency: &Currency) {
    let total = styled(&currency.format(overview.total), styles::amount(), ctx.color);
    let month = styled(&currency.format(overview.month_total), styles::amount(), ctx.color);
    print(ctx, &kv(ctx, "Total", &total));
    print(ctx, &kv(ctx, "This month", &month));

    let shares = overview.top(top);
    if shares.is_empty() {
        blank_line(ctx);
        print(ctx, "No spending recorded yet.");
        return;
    }

    let columns = [
        Column::new("Category"),
        Column::numeric("Total"),
        Column::numeric("Share"),
    ];
    let rows: Vec<Vec<String>> = shares
        .iter()
        .map(|share| {
            let name = if ctx.mode.is_pretty() {
                format!("{} {}", share.category.icon, share.category.name)
            } else {
                share.category.name.clone()
            };
            vec![
                name,
                currency.format(share.total),
                format_percentage(share.percentage),
            ]
        })
        .collect();

    blank_line(ctx);
    print(ctx, &table(ctx, &columns, &rows));
}
