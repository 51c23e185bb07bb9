//! User-facing CLI errors with exit codes and hints.

use std::fmt;

use tally_core::TallyError;

use crate::constants::exit_codes;

/// Category of failure, which decides the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidInput,
    StorageUnavailable,
    IntegrityFailed,
    WriteRejected,
    General,
}

impl ErrorKind {
    pub fn exit_code(self) -> i32 {
        match self {
            Self::NotFound => exit_codes::NOT_FOUND,
            Self::InvalidInput => exit_codes::INVALID_INPUT,
            Self::StorageUnavailable => exit_codes::STORAGE_UNAVAILABLE,
            Self::IntegrityFailed => exit_codes::INTEGRITY_FAILED,
            Self::WriteRejected => exit_codes::WRITE_REJECTED,
            Self::General => exit_codes::GENERAL,
        }
    }
}

/// An error that knows how to present itself and which code to exit with.
#[derive(Debug)]
pub struct CliError {
    pub kind: ErrorKind,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    fn new(kind: ErrorKind, message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            hint,
        }
    }

    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message, Some(hint.into()))
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message, None)
    }

    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, message, Some(hint.into()))
    }

    pub fn integrity_failed(message: impl Into<String>) -> Self {
        Self::new(
            ErrorKind::IntegrityFailed,
            message,
            Some("Hint: Restore from a backup or export data before retrying.".to_string()),
        )
    }

    pub fn exit_code(&self) -> i32 {
        self.kind.exit_code()
    }

    /// Print the error to stderr and exit the process.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self.message);
        if let Some(hint) = &self.hint {
            eprintln!("{}", hint);
        }
        std::process::exit(self.exit_code())
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<&TallyError> for CliError {
    fn from(err: &TallyError) -> Self {
        match err {
            TallyError::StorageUnavailable(detail) => Self::new(
                ErrorKind::StorageUnavailable,
                format!("Could not open the database: {}", detail),
                Some("Hint: Check the path and its permissions, or run `tally init`.".to_string()),
            ),
            TallyError::NotInitialized => Self::new(
                ErrorKind::StorageUnavailable,
                "The database has not been initialized.",
                Some("Hint: Run `tally init`.".to_string()),
            ),
            // SQLite's own wording is not useful to end users.
            TallyError::ConstraintViolation(_) => Self::new(
                ErrorKind::WriteRejected,
                "The change was rejected by the database.",
                Some("Hint: Check that the category exists (`tally categories list`).".to_string()),
            ),
            TallyError::NotFound(detail) => Self::new(ErrorKind::NotFound, detail.clone(), None),
            TallyError::InvalidInput(detail) => {
                Self::new(ErrorKind::InvalidInput, detail.clone(), None)
            }
            other => Self::new(ErrorKind::General, other.to_string(), None),
        }
    }
}

/// Turn any error bubbled up from a command into a `CliError`.
pub fn classify(err: &anyhow::Error) -> CliError {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return CliError::new(cli_err.kind, cli_err.message.clone(), cli_err.hint.clone());
    }
    if let Some(core_err) = err.downcast_ref::<TallyError>() {
        return CliError::from(core_err);
    }
    CliError::new(ErrorKind::General, format!("{:#}", err), None)
}
