//! Expense commands.

mod add;
mod list;

pub use add::handle_add;
pub use list::handle_list;
