//! Error types for Tally core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages.

use rusqlite::ErrorCode;
use thiserror::Error;

/// Result type alias for Tally operations.
pub type Result<T> = std::result::Result<T, TallyError>;

/// Core error type for Tally operations.
#[derive(Debug, Error)]
pub enum TallyError {
    /// The datastore could not be opened or initialized
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    /// An operation ran before `initialize()` completed
    #[error("Store is not initialized")]
    NotInitialized,

    /// A write violated a schema constraint (foreign key, check, not null)
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A sum of amounts does not fit in 64-bit cents
    #[error("Amount overflow: total is too large to represent")]
    AmountOverflow,

    /// Storage backend error (generic)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O error
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TallyError {
    /// True when the error came from a rejected write rather than a broken store.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, TallyError::ConstraintViolation(_))
    }
}

impl From<rusqlite::Error> for TallyError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(ref failure, ref message)
                if failure.code == ErrorCode::ConstraintViolation =>
            {
                let detail = message
                    .clone()
                    .unwrap_or_else(|| failure.to_string());
                log::warn!("SQLite constraint violation: {}", detail);
                TallyError::ConstraintViolation(detail)
            }
            other => TallyError::Storage(format!("SQLite error: {}", other)),
        }
    }
}
