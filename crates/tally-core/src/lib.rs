//! # Tally Core
//!
//! Core library for Tally - a local, single-user expense tracker.
//!
//! This crate owns the SQLite datastore of categories and expenses and the
//! aggregate queries behind the spending summary, independent of any
//! user interface.
//!
//! ## Architecture
//!
//! - **storage**: `LedgerStore` trait and the SQLite implementation
//! - **money**: fixed-point amounts in cents
//! - **clock**: "today" source and month boundaries
//! - **summary**: percentage breakdown and dashboard totals

pub mod clock;
pub mod error;
pub mod fs;
pub mod money;
pub mod storage;
pub mod summary;

pub use error::{Result, TallyError};
pub use money::Money;
pub use storage::{LedgerStore, SqliteStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
