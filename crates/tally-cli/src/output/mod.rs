//! Output formatting helpers for the CLI.
//!
//! Expenses, categories and the summary in JSON or text.

mod json;
mod text;

// Re-export public API
pub use json::{categories_json, expense_json, expenses_json, overview_json};
pub use text::{category_lookup, print_category_list, print_expense_list, print_overview, Currency};
