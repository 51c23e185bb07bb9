//! Schema DDL and default seed data.

/// Tables and indexes, safe to run on every start.
pub const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS categories (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        color TEXT NOT NULL,
        icon TEXT NOT NULL,
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
    );

    CREATE TABLE IF NOT EXISTS expenses (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        amount_cents INTEGER NOT NULL CHECK (amount_cents >= 0),
        description TEXT NOT NULL,
        category_id INTEGER NOT NULL,
        date TEXT NOT NULL,
        created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,

        FOREIGN KEY (category_id) REFERENCES categories (id)
    );

    CREATE INDEX IF NOT EXISTS expenses_date ON expenses (date);
    CREATE INDEX IF NOT EXISTS expenses_category ON expenses (category_id);
"#;

/// Default categories as (name, color, icon), inserted in this order when
/// the category table is empty.
pub const DEFAULT_CATEGORIES: [(&str, &str, &str); 8] = [
    ("Alimentación", "#ff6b6b", "🍕"),
    ("Transporte", "#4ecdc4", "🚗"),
    ("Entretenimiento", "#45b7d1", "🎬"),
    ("Salud", "#96ceb4", "🏥"),
    ("Compras", "#feca57", "🛒"),
    ("Hogar", "#ff9ff3", "🏠"),
    ("Educación", "#54a0ff", "📚"),
    ("Otros", "#ddd", "📦"),
];

pub const EXPENSE_COLUMNS: &str = "id, amount_cents, description, category_id, date, created_at";

pub const CATEGORY_COLUMNS: &str = "id, name, color, icon, created_at";

/// Newest first; `id` breaks ties between rows stamped in the same instant.
pub const EXPENSE_ORDER: &str = "ORDER BY date DESC, created_at DESC, id DESC";
