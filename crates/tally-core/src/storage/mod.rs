//! Storage layer: the `LedgerStore` trait, its data types, and the SQLite
//! implementation.

mod sqlite;
mod traits;
mod types;

pub use sqlite::{SqliteStore, SEED_CATEGORIES};
pub use traits::LedgerStore;
pub use types::{
    Category, CategoryId, CategoryTotal, Expense, ExpenseId, NewCategory, NewExpense,
    StoreMetadata,
};
