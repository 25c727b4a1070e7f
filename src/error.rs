//! Error types for GymDesk Core

use rusqlite::ErrorCode;
use rusqlite::ffi;
use thiserror::Error;

/// Main error type for desk operations
#[derive(Error, Debug)]
pub enum DeskError {
    /// A unique column (member document id, employee login) already holds this value
    #[error("Duplicate {field}: {value}")]
    DuplicateKey {
        field: &'static str,
        value: String,
    },

    /// A training, payment or activity referenced a member that does not exist
    #[error("Member not found: {0}")]
    MemberNotFound(i64),

    /// User-entered value failed to parse or validate
    #[error("Invalid {field}: {reason}")]
    InvalidInput {
        field: &'static str,
        reason: String,
    },

    /// Database operation failed
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// Configuration could not be read or written
    #[error("Config error: {0}")]
    ConfigError(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl DeskError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        DeskError::InvalidInput { field, reason: reason.into() }
    }
}

impl From<rusqlite::Error> for DeskError {
    fn from(err: rusqlite::Error) -> Self {
        DeskError::DatabaseError(err.to_string())
    }
}

impl From<serde_json::Error> for DeskError {
    fn from(err: serde_json::Error) -> Self {
        DeskError::ConfigError(err.to_string())
    }
}

/// Constraint that rejected a write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Violation {
    Unique,
    ForeignKey,
}

/// Classify a rusqlite error as a constraint violation, if it is one
pub(crate) fn constraint_violation(err: &rusqlite::Error) -> Option<Violation> {
    match err {
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation => {
            match e.extended_code {
                ffi::SQLITE_CONSTRAINT_UNIQUE | ffi::SQLITE_CONSTRAINT_PRIMARYKEY => Some(Violation::Unique),
                ffi::SQLITE_CONSTRAINT_FOREIGNKEY => Some(Violation::ForeignKey),
                _ => None,
            }
        }
        _ => None,
    }
}

/// Result type alias for desk operations
pub type Result<T> = std::result::Result<T, DeskError>;
