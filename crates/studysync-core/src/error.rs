//! Core error types for studysync-core.
//!
//! This module defines the error hierarchy using thiserror. Validation errors
//! are raised before generation, generation errors abort a run without
//! producing a partial schedule, and the remaining kinds belong to the
//! collaborators around the generator (progress tracking, storage, config).

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studysync-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Profile validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Schedule generation errors
    #[error("Generation error: {0}")]
    Generation(#[from] GenerationError),

    /// Progress tracking errors
    #[error("Progress error: {0}")]
    Progress(#[from] ProgressError),

    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Profile validation errors.
///
/// These describe input the profile form must reject before generation runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Hour outside 0-23 or unparsable clock string
    #[error("Invalid hour for '{field}': {value}")]
    InvalidHour { field: String, value: String },

    /// Empty collection
    #[error("Empty collection: {0}")]
    EmptyCollection(String),

    /// Required text field left blank
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Learning style outside the four known styles
    #[error("Unknown learning style: {0}")]
    UnknownLearningStyle(String),

    /// Two subjects share a name
    #[error("Duplicate subject name: {0}")]
    DuplicateSubject(String),

    /// Rating outside the 1-5 scale
    #[error("Rating '{field}' of subject '{subject}' must be between 1 and 5 (got {value})")]
    RatingOutOfRange {
        subject: String,
        field: &'static str,
        value: u8,
    },

    /// Commitment that does not end after it starts
    #[error("Invalid time range for commitment '{name}': end ({end}:00) must be after start ({start}:00)")]
    InvalidTimeRange { name: String, start: u8, end: u8 },
}

/// Errors that abort schedule generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// Wake and sleep hour coincide, so the day span is undefined
    #[error("Wake-up and bedtime are both {hour}:00; the available study window is ambiguous")]
    AmbiguousBoundary { hour: u8 },

    /// A subject reached task synthesis without topics
    #[error("Subject '{subject}' has no topics to study")]
    EmptyTopics { subject: String },
}

/// Errors raised while mutating a generated schedule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProgressError {
    /// No task at the given position
    #[error("No task #{index} on {day}")]
    TaskNotFound { day: chrono::Weekday, index: usize },
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

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
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
