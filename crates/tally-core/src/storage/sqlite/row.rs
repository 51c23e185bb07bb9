//! Row types for database queries.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::error::{Result, TallyError};
use crate::money::Money;
use crate::storage::types::{Category, CategoryId, Expense, ExpenseId};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw row data from the expenses table, before parsing into domain types.
#[derive(Debug)]
pub struct ExpenseRow {
    pub id: ExpenseId,
    pub amount: Money,
    pub description: String,
    pub category_id: CategoryId,
    pub date: String,
    pub created_at: String,
}

impl ExpenseRow {
    pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            amount: row.get(1)?,
            description: row.get(2)?,
            category_id: row.get(3)?,
            date: row.get(4)?,
            created_at: row.get(5)?,
        })
    }
}

impl TryFrom<ExpenseRow> for Expense {
    type Error = TallyError;

    fn try_from(row: ExpenseRow) -> Result<Self> {
        let date = NaiveDate::parse_from_str(&row.date, DATE_FORMAT)
            .map_err(|e| TallyError::Storage(format!("Invalid expense date: {}", e)))?;
        let created_at = parse_timestamp(&row.created_at)?;

        Ok(Expense {
            id: row.id,
            amount: row.amount,
            description: row.description,
            category_id: row.category_id,
            date,
            created_at,
        })
    }
}

/// Raw row data from the categories table.
#[derive(Debug)]
pub struct CategoryRow {
    pub id: CategoryId,
    pub name: String,
    pub color: String,
    pub icon: String,
    pub created_at: String,
}

impl CategoryRow {
    pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            color: row.get(2)?,
            icon: row.get(3)?,
            created_at: row.get(4)?,
        })
    }
}

impl TryFrom<CategoryRow> for Category {
    type Error = TallyError;

    fn try_from(row: CategoryRow) -> Result<Self> {
        Ok(Category {
            id: row.id,
            name: row.name,
            color: row.color,
            icon: row.icon,
            created_at: parse_timestamp(&row.created_at)?,
        })
    }
}

/// Parse RFC 3339 timestamps written by the store, falling back to the
/// `CURRENT_TIMESTAMP` column default format.
fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| TallyError::Storage(format!("Invalid timestamp: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp_formats() {
        assert!(parse_timestamp("2024-02-15T10:00:00.123456Z").is_ok());
        assert!(parse_timestamp("2024-02-15 10:00:00").is_ok());
        assert!(parse_timestamp("yesterday").is_err());
    }

    #[test]
    fn test_expense_row_rejects_bad_date() {
        let row = ExpenseRow {
            id: 1,
            amount: Money::from_cents(100),
            description: "x".to_string(),
            category_id: 1,
            date: "15/02/2024".to_string(),
            created_at: "2024-02-15 10:00:00".to_string(),
        };
        let result: Result<Expense> = row.try_into();
        assert!(matches!(result, Err(TallyError::Storage(_))));
    }
}
