//! Error types for queue operations.

use thiserror::Error;
use trackqueue_persistence::PersistenceError;

/// Errors that can occur during queue operations.
#[derive(Error, Debug)]
pub enum QueueError {
    /// Submission not found.
    #[error("submission not found: {0}")]
    NotFound(String),

    /// Missing or malformed input.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Intake is switched off in the queue config.
    #[error("submissions are currently closed")]
    SubmissionsClosed,

    /// Persistence error.
    #[error("persistence error: {0}")]
    Persistence(PersistenceError),
}

impl From<PersistenceError> for QueueError {
    fn from(err: PersistenceError) -> Self {
        match err {
            // A document vanished between our read and our write.
            PersistenceError::NotFound { id, .. } => QueueError::NotFound(id),
            other => QueueError::Persistence(other),
        }
    }
}

/// Result type alias for queue operations.
pub type Result<T> = std::result::Result<T, QueueError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_not_found_maps_to_not_found() {
        let err: QueueError = PersistenceError::submission_not_found("sub-9").into();
        assert!(matches!(err, QueueError::NotFound(ref id) if id == "sub-9"));
    }

    #[test]
    fn test_other_store_errors_are_wrapped() {
        let err: QueueError = PersistenceError::Unavailable("down".into()).into();
        assert!(matches!(err, QueueError::Persistence(_)));
        assert_eq!(err.to_string(), "persistence error: store unavailable: down");
    }
}
