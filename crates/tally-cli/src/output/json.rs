//! JSON output formatting.

use std::collections::HashMap;

use tally_core::storage::{Category, CategoryId, Expense};
use tally_core::summary::SpendingOverview;

/// Convert an expense to JSON, with its category name resolved.
pub fn expense_json(expense: &Expense, lookup: &HashMap<CategoryId, Category>) -> serde_json::Value {
    let category = lookup.get(&expense.category_id);
    serde_json::json!({
        "id": expense.id,
        "amount": expense.amount.to_string(),
        "amount_cents": expense.amount.cents(),
        "description": expense.description,
        "category_id": expense.category_id,
        "category_name": category.map(|c| c.name.as_str()),
        "category_icon": category.map(|c| c.icon.as_str()),
        "date": expense.date.format("%Y-%m-%d").to_string(),
        "created_at": expense.created_at,
    })
}

pub fn expenses_json(
    expenses: &[Expense],
    lookup: &HashMap<CategoryId, Category>,
) -> Vec<serde_json::Value> {
    expenses
        .iter()
        .map(|expense| expense_json(expense, lookup))
        .collect()
}

pub fn categories_json(categories: &[Category]) -> Vec<serde_json::Value> {
    categories
        .iter()
        .map(|category| {
            serde_json::json!({
                "id": category.id,
                "name": category.name,
                "color": category.color,
                "icon": category.icon,
                "created_at": category.created_at,
            })
        })
        .collect()
}

/// Dashboard totals with the `top` largest categories.
pub fn overview_json(overview: &SpendingOverview, top: usize) -> serde_json::Value {
    let categories: Vec<serde_json::Value> = overview
        .top(top)
        .iter()
        .map(|share| {
            serde_json::json!({
                "id": share.category.id,
                "name": share.category.name,
                "icon": share.category.icon,
                "color": share.category.color,
                "total": share.total.to_string(),
                "total_cents": share.total.cents(),
                "percentage": (share.percentage * 10.0).round() / 10.0,
            })
        })
        .collect();

    serde_json::json!({
        "total": overview.total.to_string(),
        "total_cents": overview.total.cents(),
        "month_total": overview.month_total.to_string(),
        "month_total_cents": overview.month_total.cents(),
        "categories": categories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use tally_core::summary::category_shares;
    use tally_core::storage::CategoryTotal;
    use tally_core::Money;

    fn category(id: CategoryId, name: &str) -> Category {
        Category {
            id,
            name: name.to_string(),
            color: "#ff6b6b".to_string(),
            icon: "*".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_expense_json_resolves_category_name() {
        let mut lookup = HashMap::new();
        lookup.insert(1, category(1, "Salud"));
        let expense = Expense {
            id: 9,
            amount: Money::from_cents(1250),
            description: "Farmacia".to_string(),
            category_id: 1,
            date: NaiveDate::from_ymd_opt(2024, 3, 5).unwrap(),
            created_at: Utc::now(),
        };

        let value = expense_json(&expense, &lookup);
        assert_eq!(value["amount"], "12.50");
        assert_eq!(value["amount_cents"], 1250);
        assert_eq!(value["category_name"], "Salud");
        assert_eq!(value["date"], "2024-03-05");
    }

    #[test]
    fn test_overview_json_limits_categories() {
        let summary = vec![
            CategoryTotal {
                category: category(1, "A"),
                total: Money::new(100, 0),
            },
            CategoryTotal {
                category: category(2, "B"),
                total: Money::new(50, 0),
            },
        ];
        let overview = SpendingOverview {
            total: Money::new(150, 0),
            month_total: Money::ZERO,
            shares: category_shares(&summary).unwrap(),
        };

        let value = overview_json(&overview, 1);
        assert_eq!(value["total_cents"], 15000);
        assert_eq!(value["categories"].as_array().unwrap().len(), 1);
        assert_eq!(value["categories"][0]["percentage"], 66.7);
    }
}
