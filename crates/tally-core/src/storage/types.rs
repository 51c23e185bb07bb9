//! Core data types for the storage layer.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Identifier assigned by the datastore.
pub type CategoryId = i64;

/// Identifier assigned by the datastore.
pub type ExpenseId = i64;

/// A spending bucket with a display color and icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,

    /// User-facing label (e.g., "Transporte")
    pub name: String,

    /// Hex color string, opaque to the store
    pub color: String,

    /// Short symbol, opaque to the store
    pub icon: String,

    pub created_at: DateTime<Utc>,
}

/// A single dated monetary outflow attributed to one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,

    pub amount: Money,

    pub description: String,

    pub category_id: CategoryId,

    /// Effective date of the expense (distinct from creation time)
    pub date: NaiveDate,

    pub created_at: DateTime<Utc>,
}

/// Per-category aggregate used to drive the breakdown view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Money,
}

/// Builder for creating new categories.
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub color: String,
    pub icon: String,
}

impl NewCategory {
    pub fn new(name: impl Into<String>, color: impl Into<String>, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: color.into(),
            icon: icon.into(),
        }
    }
}

/// Builder for creating new expenses.
///
/// The store does not validate these fields; callers check that the amount
/// parsed and the description is present before inserting.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub amount: Money,
    pub description: String,
    pub category_id: CategoryId,
    pub date: NaiveDate,
}

impl NewExpense {
    pub fn new(
        amount: Money,
        description: impl Into<String>,
        category_id: CategoryId,
        date: NaiveDate,
    ) -> Self {
        Self {
            amount,
            description: description.into(),
            category_id,
            date,
        }
    }
}

/// Store-level information reported by `metadata()`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreMetadata {
    /// Backing file, `None` for in-memory stores
    pub path: Option<PathBuf>,
    pub category_count: usize,
    pub expense_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_expense_builder() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let expense = NewExpense::new(Money::new(4, 20), "Coffee", 3, date);

        assert_eq!(expense.amount, Money::from_cents(420));
        assert_eq!(expense.description, "Coffee");
        assert_eq!(expense.category_id, 3);
        assert_eq!(expense.date, date);
    }

    #[test]
    fn test_new_category_builder() {
        let category = NewCategory::new("Viajes", "#123456", "✈");
        assert_eq!(category.name, "Viajes");
        assert_eq!(category.color, "#123456");
        assert_eq!(category.icon, "✈");
    }

    #[test]
    fn test_expense_serializes_amount_as_cents() {
        let expense = Expense {
            id: 1,
            amount: Money::new(12, 50),
            description: "Lunch".to_string(),
            category_id: 1,
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            created_at: Utc::now(),
        };
        let value = serde_json::to_value(&expense).unwrap();
        assert_eq!(value["amount"], 1250);
        assert_eq!(value["date"], "2024-01-05");
    }
}
