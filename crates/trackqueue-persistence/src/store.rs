//! SubmissionStore trait definition for queue storage backends.
//!
//! The queue engine only needs point reads, full scans, field updates,
//! deletes, and batched multi-document commits. Backends provide the
//! atomicity of a single update and of a single batch commit; nothing
//! stronger is promised across calls.

use async_trait::async_trait;
use trackqueue_models::{NewSubmission, QueueConfig, Submission, SubmissionId, SubmissionPatch};

use crate::batch::WriteBatch;
use crate::error::Result;

/// Trait for submission storage backends.
///
/// All operations are async so that remote document stores fit behind the
/// same interface as the local backends.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    /// Stores a new submission; the store assigns its id.
    async fn create(&self, new: NewSubmission) -> Result<Submission>;

    /// Get a submission by ID.
    ///
    /// # Returns
    /// The submission if found, `None` otherwise.
    async fn get(&self, id: &SubmissionId) -> Result<Option<Submission>>;

    /// Returns every submission, in no particular order.
    async fn scan_all(&self) -> Result<Vec<Submission>>;

    /// Patches fields of an existing submission.
    ///
    /// Fails with `PersistenceError::NotFound` if the submission is missing.
    async fn update_fields(&self, id: &SubmissionId, patch: SubmissionPatch) -> Result<()>;

    /// Delete a submission by ID.
    ///
    /// # Returns
    /// `Ok(())` if deleted successfully, or if the submission didn't exist.
    async fn delete(&self, id: &SubmissionId) -> Result<()>;

    /// Starts a new write batch for [`SubmissionStore::commit`].
    fn batch(&self) -> WriteBatch {
        WriteBatch::new()
    }

    /// Applies every mutation in the batch atomically.
    ///
    /// Batches larger than [`crate::MAX_BATCH_WRITES`] are rejected before
    /// anything is written.
    async fn commit(&self, batch: WriteBatch) -> Result<()>;

    /// Loads the queue config, returning defaults if it was never saved.
    async fn load_config(&self) -> Result<QueueConfig>;

    /// Replaces the queue config.
    async fn save_config(&self, config: QueueConfig) -> Result<()>;
}
