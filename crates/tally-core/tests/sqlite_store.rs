use chrono::NaiveDate;
use tempfile::tempdir;

use tally_core::clock::FixedClock;
use tally_core::storage::{LedgerStore, NewCategory, NewExpense, SqliteStore, SEED_CATEGORIES};
use tally_core::summary::{category_shares, overview};
use tally_core::{Money, TallyError};

fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn test_open_initialize_reopen_keeps_data() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("tally.db");

    let mut store = SqliteStore::open(&path).expect("open should succeed");
    store.initialize().expect("initialize should succeed");
    let expense_id = store
        .add_expense(&NewExpense::new(Money::new(9, 99), "Cine", 3, ymd(2024, 5, 4)))
        .expect("add should succeed");
    store.close().expect("close should succeed");

    let mut reopened = SqliteStore::open(&path).expect("reopen should succeed");
    reopened.initialize().expect("second initialize should succeed");

    assert_eq!(reopened.list_categories().unwrap().len(), SEED_CATEGORIES.len());
    let expenses = reopened.list_expenses(None).unwrap();
    assert_eq!(expenses.len(), 1);
    assert_eq!(expenses[0].id, expense_id);
    assert_eq!(expenses[0].amount, Money::from_cents(999));
    assert_eq!(expenses[0].description, "Cine");
}

#[test]
fn test_open_in_missing_directory_is_storage_unavailable() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("missing").join("tally.db");

    let result = SqliteStore::open(&path);
    assert!(matches!(result, Err(TallyError::StorageUnavailable(_))));
}

#[test]
fn test_initialize_on_non_database_file_is_storage_unavailable() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("not-a-db.db");
    std::fs::write(&path, vec![b'x'; 4096]).expect("write garbage");

    let result = SqliteStore::open(&path).and_then(|mut store| store.initialize());
    assert!(matches!(result, Err(TallyError::StorageUnavailable(_))));
}

#[test]
fn test_total_matches_sum_of_listed_expenses() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.initialize().unwrap();

    let amounts = ["0.10", "0.20", "19.99", "1250", "3,05", "0"];
    for (i, raw) in amounts.iter().enumerate() {
        let amount: Money = raw.parse().unwrap();
        store
            .add_expense(&NewExpense::new(amount, "item", (i as i64 % 8) + 1, ymd(2024, 1, 1)))
            .unwrap();
    }

    let listed =
        Money::try_sum(store.list_expenses(None).unwrap().iter().map(|e| e.amount)).unwrap();
    assert_eq!(store.total_expenses().unwrap(), listed);
    assert_eq!(listed, Money::from_cents(10 + 20 + 1999 + 125_000 + 305));
}

#[test]
fn test_category_summary_covers_custom_categories() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.initialize().unwrap();
    let travel = store
        .add_category(&NewCategory::new("Viajes", "#0abde3", "✈️"))
        .unwrap();
    store
        .add_expense(&NewExpense::new(Money::new(300, 0), "Tren", travel, ymd(2024, 6, 1)))
        .unwrap();

    let summary = store.category_summary().unwrap();
    assert_eq!(summary.len(), 9);
    assert_eq!(summary[0].category.id, travel);

    let mut ids: Vec<i64> = summary.iter().map(|s| s.category.id).collect();
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 9);

    let shares = category_shares(&summary).unwrap();
    assert_eq!(shares.len(), 1);
    assert_eq!(shares[0].percentage, 100.0);
}

#[test]
fn test_overview_uses_store_clock() {
    let mut store = SqliteStore::open_in_memory()
        .unwrap()
        .with_clock(FixedClock(ymd(2024, 2, 15)));
    store.initialize().unwrap();
    store
        .add_expense(&NewExpense::new(Money::new(100, 0), "Súper", 1, ymd(2024, 2, 29)))
        .unwrap();
    store
        .add_expense(&NewExpense::new(Money::new(50, 0), "Bus", 2, ymd(2024, 1, 31)))
        .unwrap();

    let summary = overview(&store).unwrap();
    assert_eq!(summary.total, Money::new(150, 0));
    assert_eq!(summary.month_total, Money::new(100, 0));
    assert_eq!(summary.shares.len(), 2);
    assert_eq!(summary.shares[0].category.id, 1);
}

#[test]
fn test_overflowing_totals_are_errors() {
    let mut store = SqliteStore::open_in_memory().unwrap();
    store.initialize().unwrap();
    let huge = Money::from_cents(i64::MAX / 2 + 1);
    store
        .add_expense(&NewExpense::new(huge, "Casa", 1, ymd(2024, 1, 1)))
        .unwrap();
    store
        .add_expense(&NewExpense::new(huge, "Yate", 2, ymd(2024, 1, 1)))
        .unwrap();

    let summary = store.category_summary().unwrap();
    assert_eq!(summary.len(), 8);
    assert!(matches!(category_shares(&summary), Err(TallyError::AmountOverflow)));
    assert!(store.total_expenses().is_err());
    assert!(overview(&store).is_err());
}

#[test]
fn test_backup_produces_openable_copy() {
    let dir = tempdir().expect("tempdir");
    let mut store = SqliteStore::open(&dir.path().join("tally.db")).unwrap();
    store.initialize().unwrap();
    store
        .add_expense(&NewExpense::new(Money::new(12, 0), "Libro", 7, ymd(2024, 9, 9)))
        .unwrap();

    let destination = dir.path().join("backups").join("copy.db");
    let bytes = store.backup_to(&destination).expect("backup should succeed");
    assert!(bytes > 0);

    let mut copy = SqliteStore::open(&destination).unwrap();
    copy.initialize().unwrap();
    assert_eq!(copy.list_expenses(None).unwrap().len(), 1);
    copy.check_integrity().unwrap();
}
