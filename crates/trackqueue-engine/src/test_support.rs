//! Shared fixtures for engine tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use trackqueue_models::{NewSubmission, QueueConfig, Submission, SubmissionId, SubmissionPatch};
use trackqueue_persistence::{MemoryStore, PersistenceError, Result, SubmissionStore, WriteBatch};

use crate::queue::SubmissionQueue;

/// Creates a queue over a fresh memory store, returning both.
pub fn make_queue() -> (SubmissionQueue, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    (SubmissionQueue::new(store.clone()), store)
}

/// Stores one submission per entry, with the given explicit order keys.
pub async fn seed_orders(store: &dyn SubmissionStore, orders: &[f64]) -> Vec<SubmissionId> {
    let mut ids = Vec::with_capacity(orders.len());
    for (i, order) in orders.iter().enumerate() {
        let sub = store
            .create(NewSubmission::new(format!("https://soundcloud.com/artist/track-{}", i)))
            .await
            .unwrap();
        store
            .update_fields(&sub.id, SubmissionPatch::new().with_order(*order))
            .await
            .unwrap();
        ids.push(sub.id);
    }
    ids
}

/// Stores `n` submissions without explicit order keys.
pub async fn seed_plain(store: &dyn SubmissionStore, n: usize) -> Vec<SubmissionId> {
    let mut ids = Vec::with_capacity(n);
    for i in 0..n {
        let sub = store
            .create(NewSubmission::new(format!("https://soundcloud.com/artist/plain-{}", i)))
            .await
            .unwrap();
        ids.push(sub.id);
    }
    ids
}

/// Memory store whose N-th batch commit (1-based) fails.
pub struct FailingStore {
    pub inner: MemoryStore,
    fail_on_commit: usize,
    commits: AtomicUsize,
}

impl FailingStore {
    pub fn new(fail_on_commit: usize) -> Self {
        Self {
            inner: MemoryStore::new(),
            fail_on_commit,
            commits: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl SubmissionStore for FailingStore {
    async fn create(&self, new: NewSubmission) -> Result<Submission> {
        self.inner.create(new).await
    }

    async fn get(&self, id: &SubmissionId) -> Result<Option<Submission>> {
        self.inner.get(id).await
    }

    async fn scan_all(&self) -> Result<Vec<Submission>> {
        self.inner.scan_all().await
    }

    async fn update_fields(&self, id: &SubmissionId, patch: SubmissionPatch) -> Result<()> {
        self.inner.update_fields(id, patch).await
    }

    async fn delete(&self, id: &SubmissionId) -> Result<()> {
        self.inner.delete(id).await
    }

    async fn commit(&self, batch: WriteBatch) -> Result<()> {
        let n = self.commits.fetch_add(1, Ordering::SeqCst) + 1;
        if n == self.fail_on_commit {
            return Err(PersistenceError::Unavailable("commit rejected".into()));
        }
        self.inner.commit(batch).await
    }

    async fn load_config(&self) -> Result<QueueConfig> {
        self.inner.load_config().await
    }

    async fn save_config(&self, config: QueueConfig) -> Result<()> {
        self.inner.save_config(config).await
    }
}
