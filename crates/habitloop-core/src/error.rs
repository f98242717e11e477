//! Core error types for habitloop-core.
//!
//! This module defines the error hierarchy using thiserror, split into
//! database errors (storage layer) and validation errors (bad input).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for habitloop-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Database-specific errors.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Migration failed
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,
}

/// Validation errors for habit and completion input.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Timestamp does not match the `YYYY-MM-DD HH:MM:SS` format
    #[error("Invalid timestamp '{value}': expected format YYYY-MM-DD HH:MM:SS")]
    InvalidTimestamp { value: String },

    /// Periodicity string is neither `daily` nor `weekly`
    #[error("Unsupported periodicity '{0}': expected 'daily' or 'weekly'")]
    UnsupportedPeriodicity(String),

    /// Habit name is empty or whitespace-only
    #[error("Habit name must not be empty")]
    EmptyName,

    /// Habit name already exists (names are case-insensitively unique)
    #[error("A habit named '{0}' already exists")]
    DuplicateName(String),

    /// No habit with this id exists
    #[error("No habit found with ID {0}")]
    UnknownHabit(i64),

    /// Completion timestamp lies in the future
    #[error("Completion date {0} cannot be in the future")]
    FutureCompletion(chrono::NaiveDateTime),
}

impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    DatabaseError::Locked
                } else {
                    DatabaseError::QueryFailed(err.to_string())
                }
            }
            _ => DatabaseError::QueryFailed(err.to_string()),
        }
    }
}

impl From<rusqlite::Error> for CoreError {
    fn from(err: rusqlite::Error) -> Self {
        CoreError::Database(err.into())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
