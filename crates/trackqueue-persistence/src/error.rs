//! Error types for persistence operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during persistence operations.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// Failed to read from file system.
    #[error("failed to read {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write to file system.
    #[error("failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize data to JSON.
    #[error("failed to serialize: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Failed to create directory.
    #[error("failed to create directory {path}: {source}")]
    DirectoryError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document not found.
    #[error("{kind} not found: {id}")]
    NotFound { kind: String, id: String },

    /// Write batch exceeds the per-commit mutation ceiling.
    #[error("batch of {len} writes exceeds the limit of {max}")]
    BatchTooLarge { len: usize, max: usize },

    /// Backend could not serve the request.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl PersistenceError {
    /// Builds a `NotFound` error for a submission id.
    pub fn submission_not_found(id: impl ToString) -> Self {
        PersistenceError::NotFound {
            kind: "submission".to_string(),
            id: id.to_string(),
        }
    }
}

/// Result type alias for persistence operations.
pub type Result<T> = std::result::Result<T, PersistenceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = PersistenceError::submission_not_found("sub-1");
        assert_eq!(err.to_string(), "submission not found: sub-1");
    }

    #[test]
    fn test_batch_too_large_display() {
        let err = PersistenceError::BatchTooLarge { len: 501, max: 500 };
        assert_eq!(err.to_string(), "batch of 501 writes exceeds the limit of 500");
    }
}
