//! SubmissionQueue - the entry point for every queue operation.

use std::sync::Arc;

use trackqueue_models::{Submission, SubmissionId};
use trackqueue_persistence::SubmissionStore;

use crate::error::{QueueError, Result};

/// Queue operations over a shared submission store.
///
/// Cloning is cheap; clones share the same store.
#[derive(Clone)]
pub struct SubmissionQueue {
    pub(crate) store: Arc<dyn SubmissionStore>,
}

impl SubmissionQueue {
    /// Creates a queue over the given store.
    pub fn new(store: Arc<dyn SubmissionStore>) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &Arc<dyn SubmissionStore> {
        &self.store
    }

    /// Loads a submission, failing with `NotFound` if it does not exist.
    pub async fn get(&self, id: &SubmissionId) -> Result<Submission> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| QueueError::NotFound(id.to_string()))
    }
}
