// Error types for the task store

use thiserror::Error;

/// Result type alias for task store operations
pub type Result<T> = std::result::Result<T, TaskError>;

/// Errors raised by the task store and its storage backends
///
/// Looking up an unknown id is never an error: update, toggle and delete
/// treat it as a no-op.
#[derive(Debug, Error)]
pub enum TaskError {
    /// Title was empty or whitespace-only
    #[error("Task title cannot be empty")]
    EmptyTitle,

    /// Priority string not one of low/medium/high
    #[error("Invalid priority '{value}' (expected low, medium or high)")]
    InvalidPriority { value: String },

    /// Due date not in YYYY-MM-DD form
    #[error("Invalid due date '{value}' (expected YYYY-MM-DD)")]
    InvalidDueDate { value: String },

    /// Date format string chrono cannot render
    #[error("Invalid date format '{format}'")]
    InvalidDateFormat { format: String },

    /// Slot key rejected by the storage backend
    #[error("Invalid slot key '{key}': {reason}")]
    InvalidSlotKey { key: String, reason: String },

    /// Id prefix matched more than one task
    #[error("Id prefix '{prefix}' matches {count} tasks")]
    AmbiguousId { prefix: String, count: usize },

    /// SQLite error
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    /// JSON encoding/decoding error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("Config error: {0}")]
    Config(#[from] serde_yaml::Error),
}

impl TaskError {
    /// Create an InvalidSlotKey error
    pub fn invalid_key(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSlotKey {
            key: key.into(),
            reason: reason.into(),
        }
    }
}
