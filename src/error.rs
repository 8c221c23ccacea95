//! Error types for the kanban data layer.
//!
//! Most of the core never errors: not-found surfaces as `None`/`false` and
//! validation as a report. Errors exist only at the persistence boundary.

use thiserror::Error;

/// Result type for kanban storage operations.
pub type Result<T> = std::result::Result<T, KanbanError>;

/// Errors that can occur at the persistence boundary.
#[derive(Debug, Error)]
pub enum KanbanError {
    /// Backup blob is undecodable or missing its version/data envelope
    #[error("invalid backup format: {reason}")]
    InvalidBackup { reason: String },

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error from a file-backed store
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl KanbanError {
    /// Create an invalid-backup error.
    pub fn invalid_backup(reason: impl Into<String>) -> Self {
        Self::InvalidBackup {
            reason: reason.into(),
        }
    }
}
