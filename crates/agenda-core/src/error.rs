//! Error types for the agenda engine.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all agenda operations.
#[derive(Error, Debug)]
pub enum AgendaError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Event not found for the given ID
    #[error("Event '{id}' not found")]
    EventNotFound { id: String },
    /// Item referenced by an intent is absent from the day it claims to
    /// belong to (or from the whole schedule, when the intent names no day).
    /// Indicates the in-memory schedule has desynced from the store; the
    /// recommended recovery is a full re-fetch.
    #[error("Item '{id}' not found{}", .day.map_or_else(String::new, |d| format!(" in day {d}")))]
    ItemNotFound { id: String, day: Option<u32> },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> AgendaError {
        AgendaError::Database {
            message: self.message,
            source,
        }
    }
}

impl AgendaError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::database(message).with_source(source)
    }

    /// Creates an input validation error.
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates an item-not-found error for the day an intent claimed.
    pub fn item_not_found(id: impl Into<String>, day: impl Into<Option<u32>>) -> Self {
        Self::ItemNotFound {
            id: id.into(),
            day: day.into(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| AgendaError::database(message).with_source(e))
    }
}

/// Result type alias for agenda operations
pub type Result<T> = std::result::Result<T, AgendaError>;
