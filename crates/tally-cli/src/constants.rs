//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Usage error (reported by clap)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const GENERAL: i32 = 1;

    /// Resource not found (config, database, category).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;

    /// The database could not be opened or initialized.
    pub const STORAGE_UNAVAILABLE: i32 = 5;

    /// Integrity check failed.
    pub const INTEGRITY_FAILED: i32 = 6;

    /// The store refused a write (unknown category, bad value).
    pub const WRITE_REJECTED: i32 = 7;
}

/// File name of the database inside the data directory.
pub const DB_FILE_NAME: &str = "tally.db";
