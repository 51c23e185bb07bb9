//! Calendar clock used for month-relative queries.

use chrono::{Datelike, Local, Months, NaiveDate};

/// Source of "today" for the store.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// The caller's local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// First and last calendar day of the month containing `date`.
pub fn month_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = date.with_day(1).unwrap_or(date);
    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(date);
    (first, last)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_bounds_leap_february() {
        assert_eq!(month_bounds(ymd(2024, 2, 15)), (ymd(2024, 2, 1), ymd(2024, 2, 29)));
    }

    #[test]
    fn test_month_bounds_common_february() {
        assert_eq!(month_bounds(ymd(2023, 2, 28)), (ymd(2023, 2, 1), ymd(2023, 2, 28)));
    }

    #[test]
    fn test_month_bounds_month_lengths() {
        assert_eq!(month_bounds(ymd(2024, 4, 1)).1, ymd(2024, 4, 30));
        assert_eq!(month_bounds(ymd(2024, 12, 31)), (ymd(2024, 12, 1), ymd(2024, 12, 31)));
        assert_eq!(month_bounds(ymd(2024, 1, 31)).1, ymd(2024, 1, 31));
    }

    #[test]
    fn test_fixed_clock_returns_pinned_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }
}
