//! In-memory submission store.
//!
//! Nothing is persisted. Used for tests and for queues that only need to
//! live as long as the process.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use trackqueue_models::{NewSubmission, QueueConfig, Submission, SubmissionId, SubmissionPatch};

use crate::batch::WriteBatch;
use crate::collection::Collection;
use crate::error::Result;
use crate::store::SubmissionStore;

/// Submission store backed by a `RwLock`-protected map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collection: RwLock<Collection>,
    commits: AtomicUsize,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of batch commits applied so far.
    pub fn commit_count(&self) -> usize {
        self.commits.load(Ordering::SeqCst)
    }

    /// Returns the number of stored submissions.
    pub async fn len(&self) -> usize {
        self.collection.read().await.len()
    }

    /// Returns true if no submissions are stored.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn create(&self, new: NewSubmission) -> Result<Submission> {
        let submission = self.collection.write().await.insert(new);
        debug!(id = %submission.id, "Created submission");
        Ok(submission)
    }

    async fn get(&self, id: &SubmissionId) -> Result<Option<Submission>> {
        Ok(self.collection.read().await.get(id))
    }

    async fn scan_all(&self) -> Result<Vec<Submission>> {
        Ok(self.collection.read().await.scan())
    }

    async fn update_fields(&self, id: &SubmissionId, patch: SubmissionPatch) -> Result<()> {
        self.collection.write().await.update(id, &patch)?;
        debug!(id = %id, ?patch, "Updated submission");
        Ok(())
    }

    async fn delete(&self, id: &SubmissionId) -> Result<()> {
        let existed = self.collection.write().await.remove(id);
        debug!(id = %id, existed, "Deleted submission");
        Ok(())
    }

    async fn commit(&self, batch: WriteBatch) -> Result<()> {
        self.collection.write().await.apply(&batch)?;
        self.commits.fetch_add(1, Ordering::SeqCst);
        debug!(writes = batch.len(), "Committed batch");
        Ok(())
    }

    async fn load_config(&self) -> Result<QueueConfig> {
        Ok(self.collection.read().await.config())
    }

    async fn save_config(&self, config: QueueConfig) -> Result<()> {
        self.collection.write().await.set_config(config);
        Ok(())
    }
}
