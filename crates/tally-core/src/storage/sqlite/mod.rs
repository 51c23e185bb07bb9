//! SQLite storage backend.
//!
//! A single connection is held behind a mutex for the lifetime of the
//! store, so every statement runs one at a time regardless of how many
//! callers share the store.

mod row;
mod schema;

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{NaiveDate, SecondsFormat, Utc};
use rusqlite::{params, Connection, OptionalExtension, ToSql};

use crate::clock::{month_bounds, Clock, LocalClock};
use crate::error::{Result, TallyError};
use crate::money::Money;
use crate::storage::traits::LedgerStore;
use crate::storage::types::{
    Category, CategoryId, CategoryTotal, Expense, ExpenseId, NewCategory, NewExpense,
    StoreMetadata,
};

use row::{CategoryRow, ExpenseRow, DATE_FORMAT};
use schema::{CATEGORY_COLUMNS, DEFAULT_CATEGORIES, EXPENSE_COLUMNS, EXPENSE_ORDER, SCHEMA};

pub use schema::DEFAULT_CATEGORIES as SEED_CATEGORIES;

/// SQLite-backed ledger store.
pub struct SqliteStore {
    path: Option<PathBuf>,
    conn: Mutex<Connection>,
    clock: Box<dyn Clock>,
    initialized: bool,
}

impl SqliteStore {
    /// Open (or create) the database file at `path`.
    ///
    /// The schema is not touched until `initialize()` runs.
    ///
    /// # Errors
    ///
    /// Returns `TallyError::StorageUnavailable` if the file cannot be opened.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|e| {
            TallyError::StorageUnavailable(format!("Cannot open {}: {}", path.display(), e))
        })?;
        Self::from_connection(conn, Some(path.to_path_buf()))
    }

    /// Open a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| TallyError::StorageUnavailable(format!("Cannot open in-memory db: {}", e)))?;
        Self::from_connection(conn, None)
    }

    fn from_connection(conn: Connection, path: Option<PathBuf>) -> Result<Self> {
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .map_err(|e| TallyError::StorageUnavailable(format!("Cannot configure db: {}", e)))?;
        log::debug!(
            "Opened SQLite store at {}",
            path.as_deref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| ":memory:".to_string())
        );
        Ok(Self {
            path,
            conn: Mutex::new(conn),
            clock: Box::new(LocalClock),
            initialized: false,
        })
    }

    /// Replace the clock used for month-relative queries.
    pub fn with_clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    /// Path of the backing file, `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Close the connection, reporting any error SQLite raises on shutdown.
    pub fn close(self) -> Result<()> {
        let conn = self
            .conn
            .into_inner()
            .map_err(|_| TallyError::Storage("SQLite connection poisoned".to_string()))?;
        conn.close().map_err(|(_, e)| e.into())
    }

    /// Write a consistent copy of the database to `destination`.
    ///
    /// The copy is written next to the destination first and then renamed
    /// into place, so a failed backup never leaves a partial file behind.
    pub fn backup_to(&self, destination: &Path) -> Result<u64> {
        self.ensure_initialized()?;

        let parent = crate::fs::prepare_parent(destination)?;

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| TallyError::Storage(format!("System time error: {}", e)))?
            .as_nanos();
        let temp_path = parent.join(format!(".tally-backup-{}.tmp", nanos));
        let temp_str = temp_path
            .to_str()
            .ok_or_else(|| TallyError::InvalidInput("Backup path is not valid UTF-8".to_string()))?;

        {
            let conn = self.lock_conn()?;
            conn.execute("VACUUM INTO ?", [temp_str])?;
        }

        let bytes = std::fs::metadata(&temp_path)?.len();
        crate::fs::replace_file(&temp_path, destination)
            .map_err(|e| TallyError::Storage(format!("Backup rename failed: {}", e)))?;
        log::info!("Backed up {} bytes to {}", bytes, destination.display());
        Ok(bytes)
    }

    /// Lock the database connection, returning an error if the mutex is poisoned.
    fn lock_conn(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| TallyError::Storage("SQLite connection poisoned".to_string()))
    }

    fn ensure_initialized(&self) -> Result<()> {
        if self.initialized {
            Ok(())
        } else {
            log::error!("Store used before initialize()");
            Err(TallyError::NotInitialized)
        }
    }

    fn now_timestamp() -> String {
        Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
    }

    fn date_param(date: NaiveDate) -> String {
        date.format(DATE_FORMAT).to_string()
    }

    fn seed_default_categories(conn: &mut Connection) -> Result<()> {
        let tx = conn.transaction()?;
        let count: i64 = tx.query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))?;
        if count == 0 {
            let created_at = Self::now_timestamp();
            for (name, color, icon) in DEFAULT_CATEGORIES {
                tx.execute(
                    "INSERT INTO categories (name, color, icon, created_at) VALUES (?, ?, ?, ?)",
                    (name, color, icon, &created_at),
                )?;
            }
            log::info!("Seeded {} default categories", DEFAULT_CATEGORIES.len());
        }
        tx.commit()?;
        Ok(())
    }

    fn query_expenses(&self, clause: &str, params: &[&dyn ToSql]) -> Result<Vec<Expense>> {
        self.ensure_initialized()?;
        let conn = self.lock_conn()?;

        let query = format!("SELECT {} FROM expenses {}", EXPENSE_COLUMNS, clause);
        log::debug!("{}", query);
        let mut stmt = conn.prepare(&query)?;
        let rows = stmt.query_map(params, ExpenseRow::from_row)?;

        let mut expenses = Vec::new();
        for row in rows {
            expenses.push(row?.try_into()?);
        }
        Ok(expenses)
    }
}

impl LedgerStore for SqliteStore {
    fn initialize(&mut self) -> Result<()> {
        let conn = self
            .conn
            .get_mut()
            .map_err(|_| TallyError::Storage("SQLite connection poisoned".to_string()))?;

        conn.execute_batch(SCHEMA)
            .map_err(|e| TallyError::StorageUnavailable(format!("Cannot create schema: {}", e)))?;
        Self::seed_default_categories(conn).map_err(|e| match e {
            TallyError::Storage(msg) => TallyError::StorageUnavailable(msg),
            other => other,
        })?;

        self.initialized = true;
        log::debug!("Store initialized");
        Ok(())
    }

    fn metadata(&self) -> Result<StoreMetadata> {
        self.ensure_initialized()?;
        let conn = self.lock_conn()?;

        let category_count: i64 =
            conn.query_row("SELECT COUNT(*) FROM categories", [], |row| row.get(0))?;
        let expense_count: i64 =
            conn.query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?;

        Ok(StoreMetadata {
            path: self.path.clone(),
            category_count: category_count as usize,
            expense_count: expense_count as usize,
        })
    }

    fn add_category(&mut self, category: &NewCategory) -> Result<CategoryId> {
        self.ensure_initialized()?;
        let conn = self.lock_conn()?;

        conn.execute(
            "INSERT INTO categories (name, color, icon, created_at) VALUES (?, ?, ?, ?)",
            (
                &category.name,
                &category.color,
                &category.icon,
                Self::now_timestamp(),
            ),
        )?;
        let id = conn.last_insert_rowid();
        log::debug!("Added category {} ({})", id, category.name);
        Ok(id)
    }

    fn get_category(&self, id: CategoryId) -> Result<Option<Category>> {
        self.ensure_initialized()?;
        let conn = self.lock_conn()?;

        let row = conn
            .query_row(
                &format!("SELECT {} FROM categories WHERE id = ?", CATEGORY_COLUMNS),
                [id],
                CategoryRow::from_row,
            )
            .optional()?;
        row.map(Category::try_from).transpose()
    }

    fn list_categories(&self) -> Result<Vec<Category>> {
        self.ensure_initialized()?;
        let conn = self.lock_conn()?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM categories ORDER BY name ASC, id ASC",
            CATEGORY_COLUMNS
        ))?;
        let rows = stmt.query_map([], CategoryRow::from_row)?;

        let mut categories = Vec::new();
        for row in rows {
            categories.push(row?.try_into()?);
        }
        Ok(categories)
    }

    fn add_expense(&mut self, expense: &NewExpense) -> Result<ExpenseId> {
        self.ensure_initialized()?;
        let conn = self.lock_conn()?;

        conn.execute(
            r#"
            INSERT INTO expenses (amount_cents, description, category_id, date, created_at)
            VALUES (?, ?, ?, ?, ?)
            "#,
            (
                expense.amount,
                &expense.description,
                expense.category_id,
                Self::date_param(expense.date),
                Self::now_timestamp(),
            ),
        )?;
        let id = conn.last_insert_rowid();
        log::debug!("Added expense {} ({})", id, expense.amount);
        Ok(id)
    }

    fn list_expenses(&self, limit: Option<usize>) -> Result<Vec<Expense>> {
        match limit {
            Some(limit) => {
                let limit = i64::try_from(limit).unwrap_or(i64::MAX);
                self.query_expenses(&format!("{} LIMIT ?", EXPENSE_ORDER), params![limit])
            }
            None => self.query_expenses(EXPENSE_ORDER, params![]),
        }
    }

    fn list_expenses_by_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Expense>> {
        let start = Self::date_param(start);
        let end = Self::date_param(end);
        self.query_expenses(
            &format!("WHERE date BETWEEN ? AND ? {}", EXPENSE_ORDER),
            params![start, end],
        )
    }

    fn list_expenses_by_category(&self, category_id: CategoryId) -> Result<Vec<Expense>> {
        self.query_expenses(
            &format!("WHERE category_id = ? {}", EXPENSE_ORDER),
            params![category_id],
        )
    }

    fn current_month_expenses(&self) -> Result<Vec<Expense>> {
        let (start, end) = month_bounds(self.clock.today());
        self.list_expenses_by_date_range(start, end)
    }

    fn total_expenses(&self) -> Result<Money> {
        self.ensure_initialized()?;
        let conn = self.lock_conn()?;

        let total: Money = conn.query_row(
            "SELECT COALESCE(SUM(amount_cents), 0) FROM expenses",
            [],
            |row| row.get(0),
        )?;
        Ok(total)
    }

    fn category_summary(&self) -> Result<Vec<CategoryTotal>> {
        self.ensure_initialized()?;
        let conn = self.lock_conn()?;

        let mut stmt = conn.prepare(
            r#"
            SELECT c.id, c.name, c.color, c.icon, c.created_at,
                   COALESCE(SUM(e.amount_cents), 0) AS total
            FROM categories c
            LEFT JOIN expenses e ON e.category_id = c.id
            GROUP BY c.id
            ORDER BY total DESC, c.name ASC, c.id ASC
            "#,
        )?;
        let rows = stmt.query_map([], |row| {
            Ok((CategoryRow::from_row(row)?, row.get::<_, Money>(5)?))
        })?;

        let mut summary = Vec::new();
        for row in rows {
            let (category_row, total) = row?;
            summary.push(CategoryTotal {
                category: category_row.try_into()?,
                total,
            });
        }
        Ok(summary)
    }

    fn check_integrity(&self) -> Result<()> {
        self.ensure_initialized()?;
        let conn = self.lock_conn()?;

        let status: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
        if status != "ok" {
            return Err(TallyError::Storage(format!(
                "Integrity check failed: {}",
                status
            )));
        }

        let mut stmt = conn.prepare("PRAGMA foreign_key_check")?;
        let mut rows = stmt.query([])?;
        if rows.next()?.is_some() {
            return Err(TallyError::Storage(
                "Foreign key integrity check failed".to_string(),
            ));
        }

        Ok(())
    }
}
