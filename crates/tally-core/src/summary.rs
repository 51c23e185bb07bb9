//! Derived spending analytics.
//!
//! Everything here is computed from store results on demand; nothing is
//! cached between calls.

use serde::Serialize;

use crate::error::Result;
use crate::money::Money;
use crate::storage::{Category, CategoryTotal, LedgerStore};

/// A category's slice of overall spending.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryShare {
    pub category: Category,
    pub total: Money,
    /// Percentage of the grand total, in `0.0..=100.0`
    pub percentage: f64,
}

/// Percentage breakdown of a category summary.
///
/// Categories with a zero total are left out. The result is ordered by
/// total, highest first. Fails when the grand total overflows.
pub fn category_shares(summary: &[CategoryTotal]) -> Result<Vec<CategoryShare>> {
    let grand_total = Money::try_sum(summary.iter().map(|item| item.total))?;

    let mut shares: Vec<CategoryShare> = summary
        .iter()
        .filter(|item| item.total > Money::ZERO)
        .map(|item| CategoryShare {
            category: item.category.clone(),
            total: item.total,
            percentage: item.total.percent_of(grand_total),
        })
        .collect();
    shares.sort_by(|a, b| b.total.cmp(&a.total));
    Ok(shares)
}

/// Totals shown on the dashboard.
#[derive(Debug, Clone, Serialize)]
pub struct SpendingOverview {
    /// Sum of every expense ever recorded
    pub total: Money,
    /// Sum of expenses dated in the current month
    pub month_total: Money,
    pub shares: Vec<CategoryShare>,
}

impl SpendingOverview {
    /// The `n` largest shares. `total` still covers every category.
    pub fn top(&self, n: usize) -> &[CategoryShare] {
        &self.shares[..n.min(self.shares.len())]
    }
}

/// Collect the dashboard totals from a store.
pub fn overview<S: LedgerStore + ?Sized>(store: &S) -> Result<SpendingOverview> {
    let total = store.total_expenses()?;
    let month_total = Money::try_sum(
        store
            .current_month_expenses()?
            .iter()
            .map(|expense| expense.amount),
    )?;
    let shares = category_shares(&store.category_summary()?)?;

    Ok(SpendingOverview {
        total,
        month_total,
        shares,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn total(id: i64, units: i64) -> CategoryTotal {
        CategoryTotal {
            category: Category {
                id,
                name: format!("c{}", id),
                color: "#000".to_string(),
                icon: "*".to_string(),
                created_at: Utc::now(),
            },
            total: Money::new(units, 0),
        }
    }

    #[test]
    fn test_shares_exclude_zero_totals() {
        let shares = category_shares(&[total(1, 100), total(2, 50), total(3, 0)]).unwrap();

        assert_eq!(shares.len(), 2);
        assert_eq!(format!("{:.1}", shares[0].percentage), "66.7");
        assert_eq!(format!("{:.1}", shares[1].percentage), "33.3");
        let sum: f64 = shares.iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_shares_sorted_by_total() {
        let shares = category_shares(&[total(1, 10), total(2, 30), total(3, 20)]).unwrap();
        let ids: Vec<i64> = shares.iter().map(|s| s.category.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_shares_empty_when_nothing_spent() {
        assert!(category_shares(&[total(1, 0), total(2, 0)]).unwrap().is_empty());
        assert!(category_shares(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_shares_fail_when_grand_total_overflows() {
        let mut huge = vec![total(1, 0), total(2, 0)];
        for item in &mut huge {
            item.total = Money::from_cents(i64::MAX / 2 + 1);
        }

        assert!(matches!(
            category_shares(&huge),
            Err(crate::error::TallyError::AmountOverflow)
        ));
    }

    #[test]
    fn test_top_limits_entries_only() {
        let summary: Vec<CategoryTotal> = (1..=8).map(|id| total(id, id * 10)).collect();
        let overview = SpendingOverview {
            total: Money::try_sum(summary.iter().map(|s| s.total)).unwrap(),
            month_total: Money::ZERO,
            shares: category_shares(&summary).unwrap(),
        };

        assert_eq!(overview.top(6).len(), 6);
        assert_eq!(overview.top(6)[0].category.id, 8);
        assert_eq!(overview.top(20).len(), 8);
        assert_eq!(overview.total, Money::new(360, 0));
    }
}
