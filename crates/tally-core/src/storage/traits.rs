//! Ledger store trait definition.
//!
//! The `LedgerStore` trait is the interface the presentation layer calls
//! into. It owns categories and expenses and answers the aggregate queries
//! behind the summary view.

use chrono::NaiveDate;

use super::types::{
    Category, CategoryId, CategoryTotal, Expense, ExpenseId, NewCategory, NewExpense,
    StoreMetadata,
};
use crate::error::Result;
use crate::money::Money;

/// Local persistence and aggregation for expenses.
///
/// All implementations must ensure:
/// - `initialize()` is idempotent and seeds default categories only once
/// - Every other operation fails with `TallyError::NotInitialized` before it
/// - Aggregates are recomputed on every call, never cached
pub trait LedgerStore: Send + Sync {
    /// Create the schema if needed and seed the default categories when the
    /// category set is empty.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::StorageUnavailable` if the schema cannot be created.
    fn initialize(&mut self) -> Result<()>;

    /// Store-level counts and location.
    fn metadata(&self) -> Result<StoreMetadata>;

    // --- Category operations ---

    /// Insert a new category and return its id.
    ///
    /// Names are not required to be unique.
    fn add_category(&mut self, category: &NewCategory) -> Result<CategoryId>;

    /// Get a category by id.
    ///
    /// Returns `Ok(None)` if no category has this id.
    fn get_category(&self, id: CategoryId) -> Result<Option<Category>>;

    /// All categories sorted by name ascending.
    fn list_categories(&self) -> Result<Vec<Category>>;

    // --- Expense operations ---

    /// Insert a new expense stamped with the current time and return its id.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::ConstraintViolation` if `category_id` does not
    /// reference an existing category.
    fn add_expense(&mut self, expense: &NewExpense) -> Result<ExpenseId>;

    /// Expenses newest first (by date, then creation time).
    ///
    /// Returns at most `limit` rows when given.
    fn list_expenses(&self, limit: Option<usize>) -> Result<Vec<Expense>>;

    /// Expenses whose date falls in `start..=end`, newest first.
    fn list_expenses_by_date_range(&self, start: NaiveDate, end: NaiveDate)
        -> Result<Vec<Expense>>;

    /// Expenses for one category, newest first.
    fn list_expenses_by_category(&self, category_id: CategoryId) -> Result<Vec<Expense>>;

    /// Expenses dated within the current calendar month.
    fn current_month_expenses(&self) -> Result<Vec<Expense>>;

    // --- Aggregates ---

    /// Sum of every expense amount, zero when there are none.
    fn total_expenses(&self) -> Result<Money>;

    /// Every category with the sum of its expenses, highest total first.
    ///
    /// Categories without expenses are included with a zero total.
    fn category_summary(&self) -> Result<Vec<CategoryTotal>>;

    // --- Maintenance operations ---

    /// Check datastore integrity.
    ///
    /// Verifies:
    /// - SQLite page integrity
    /// - Foreign key relationships
    fn check_integrity(&self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_is_object_safe() {
        fn _accepts_store(_store: &dyn LedgerStore) {}
    }
}
