//! Fixed-point monetary amounts.
//!
//! Amounts are held as an integer count of cents so that sums over many
//! expenses never drift the way floating-point totals do.

use std::fmt;
use std::str::FromStr;

use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};

const CENTS_PER_UNIT: i64 = 100;

/// A monetary amount in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Build an amount from whole units and cents, e.g. `Money::new(12, 50)` is 12.50.
    pub const fn new(units: i64, cents: i64) -> Self {
        Self(units * CENTS_PER_UNIT + cents)
    }

    pub const fn cents(self) -> i64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Whole units (truncated toward zero).
    pub fn units(self) -> i64 {
        self.0 / CENTS_PER_UNIT
    }

    /// Cents remainder, always in `0..100`.
    pub fn fraction(self) -> i64 {
        (self.0 % CENTS_PER_UNIT).abs()
    }

    /// `None` when the result does not fit in an `i64` of cents.
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Add up amounts, failing with `AmountOverflow` instead of wrapping.
    pub fn try_sum<I>(amounts: I) -> Result<Money>
    where
        I: IntoIterator<Item = Money>,
    {
        amounts
            .into_iter()
            .try_fold(Money::ZERO, Money::checked_add)
            .ok_or(TallyError::AmountOverflow)
    }

    /// Share of `total` that this amount represents, as a percentage.
    ///
    /// Returns 0 when `total` is zero.
    pub fn percent_of(self, total: Money) -> f64 {
        if total.0 == 0 {
            return 0.0;
        }
        100.0 * self.0 as f64 / total.0 as f64
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.units().abs(), self.fraction())
    }
}

impl FromStr for Money {
    type Err = TallyError;

    /// Parse a non-negative amount such as `12`, `12.5`, `12.50` or `12,50`.
    fn from_str(value: &str) -> Result<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(TallyError::InvalidInput("Amount is empty".to_string()));
        }
        if trimmed.starts_with('-') {
            return Err(TallyError::InvalidInput(format!(
                "Amount must not be negative: {}",
                trimmed
            )));
        }

        let normalized = trimmed.replace(',', ".");
        let (whole, fraction) = normalized
            .split_once('.')
            .unwrap_or((normalized.as_str(), ""));

        let all_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(TallyError::InvalidInput(format!(
                "Invalid amount: {}",
                trimmed
            )));
        }
        if fraction.len() > 2 {
            return Err(TallyError::InvalidInput(format!(
                "Amount has more than two decimal places: {}",
                trimmed
            )));
        }

        let whole_value: i64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| TallyError::InvalidInput(format!("Amount too large: {}", trimmed)))?
        };
        let fraction_value: i64 = match fraction.len() {
            0 => 0,
            1 => fraction.parse::<i64>().unwrap_or(0) * 10,
            _ => fraction.parse::<i64>().unwrap_or(0),
        };

        whole_value
            .checked_mul(CENTS_PER_UNIT)
            .and_then(|cents| cents.checked_add(fraction_value))
            .map(Money)
            .ok_or_else(|| TallyError::InvalidInput(format!("Amount too large: {}", trimmed)))
    }
}

impl ToSql for Money {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.0))
    }
}

impl FromSql for Money {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        i64::column_result(value).map(Money)
    }
}
