//! Deleting submissions: one at a time, or the whole queue in batches.

use futures::future::join_all;
use tracing::{error, info};
use trackqueue_models::SubmissionId;
use trackqueue_persistence::{WriteBatch, MAX_BATCH_WRITES};

use crate::error::{QueueError, Result};
use crate::queue::SubmissionQueue;

/// Splits deletes of `ids` into batches of at most [`MAX_BATCH_WRITES`].
pub fn delete_batches(ids: &[SubmissionId]) -> Vec<WriteBatch> {
    ids.chunks(MAX_BATCH_WRITES)
        .map(|chunk| {
            let mut batch = WriteBatch::new();
            for id in chunk {
                batch.delete(id.clone());
            }
            batch
        })
        .collect()
}

impl SubmissionQueue {
    /// Deletes one submission. Deleting a missing submission succeeds.
    pub async fn delete(&self, id: &SubmissionId) -> Result<()> {
        if id.as_str().trim().is_empty() {
            return Err(QueueError::InvalidInput("submission id is required".into()));
        }
        self.store.delete(id).await?;
        info!(id = %id, "Deleted submission");
        Ok(())
    }

    /// Deletes every submission, returning how many existed at scan time.
    ///
    /// All batch commits run concurrently. If any batch fails the error is
    /// returned, but batches that already committed stay deleted.
    pub async fn clear_all(&self) -> Result<usize> {
        let ids: Vec<SubmissionId> = self
            .store
            .scan_all()
            .await?
            .into_iter()
            .map(|s| s.id)
            .collect();

        if ids.is_empty() {
            info!("Queue already empty");
            return Ok(0);
        }

        let batches = delete_batches(&ids);
        let batch_count = batches.len();
        let results = join_all(batches.into_iter().map(|batch| self.store.commit(batch))).await;

        let failed = results.iter().filter(|r| r.is_err()).count();
        if let Some(err) = results.into_iter().find_map(|r| r.err()) {
            error!(
                failed,
                batches = batch_count,
                error = %err,
                "Queue clear partially failed"
            );
            return Err(err.into());
        }

        info!(deleted = ids.len(), batches = batch_count, "Cleared queue");
        Ok(ids.len())
    }
}
