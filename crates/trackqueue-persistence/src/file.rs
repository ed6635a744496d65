//! File-backed submission store.
//!
//! The whole collection is kept in memory and written through to a single
//! JSON snapshot after every mutation:
//!
//! ```text
//! base_path/
//! └── queue.json
//! ```
//!
//! Each mutation is applied to a staged copy, the copy is written with an
//! atomic temp-file rename, and only then swapped in. A failed write leaves
//! both memory and disk at the previous state, so a batch commit is atomic
//! on disk as well.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info};
use trackqueue_models::{NewSubmission, QueueConfig, Submission, SubmissionId, SubmissionPatch};

use crate::atomic::{atomic_write_json, read_json_optional};
use crate::batch::WriteBatch;
use crate::collection::{Collection, Snapshot};
use crate::error::{PersistenceError, Result};
use crate::store::SubmissionStore;

const SNAPSHOT_FILE: &str = "queue.json";

/// Submission store persisted as a JSON snapshot.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    collection: RwLock<Collection>,
}

impl FileStore {
    /// Opens the store in `base_path`, loading an existing snapshot if present.
    pub async fn open(base_path: impl Into<PathBuf>) -> Result<Self> {
        let base_path = base_path.into();
        std::fs::create_dir_all(&base_path).map_err(|source| PersistenceError::DirectoryError {
            path: base_path.clone(),
            source,
        })?;

        let path = base_path.join(SNAPSHOT_FILE);
        let snapshot: Snapshot = read_json_optional(&path)?.unwrap_or_default();
        info!(
            path = %path.display(),
            count = snapshot.submissions.len(),
            "Loaded submission snapshot"
        );

        Ok(Self {
            path,
            collection: RwLock::new(Collection::from_snapshot(snapshot)),
        })
    }

    /// Returns the path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs `mutate` on a staged copy, persists it, then swaps it in.
    ///
    /// The write guard is held until the snapshot is on disk, so snapshots
    /// land in mutation order. The file write itself runs on the blocking pool.
    async fn write_through<T>(
        &self,
        mutate: impl FnOnce(&mut Collection) -> Result<T> + Send,
    ) -> Result<T> {
        let mut current = self.collection.write().await;
        let mut staged = current.clone();
        let out = mutate(&mut staged)?;

        let snapshot = staged.to_snapshot();
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || atomic_write_json(&path, &snapshot))
            .await
            .map_err(|e| PersistenceError::Unavailable(format!("snapshot writer failed: {}", e)))??;

        *current = staged;
        Ok(out)
    }
}

#[async_trait]
impl SubmissionStore for FileStore {
    async fn create(&self, new: NewSubmission) -> Result<Submission> {
        let submission = self.write_through(|c| Ok(c.insert(new))).await?;
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
        self.write_through(|c| c.update(id, &patch)).await?;
        debug!(id = %id, ?patch, "Updated submission");
        Ok(())
    }

    async fn delete(&self, id: &SubmissionId) -> Result<()> {
        if self.collection.read().await.get(id).is_none() {
            return Ok(());
        }
        self.write_through(|c| Ok(c.remove(id))).await?;
        debug!(id = %id, "Deleted submission");
        Ok(())
    }

    async fn commit(&self, batch: WriteBatch) -> Result<()> {
        self.write_through(|c| c.apply(&batch)).await?;
        debug!(writes = batch.len(), "Committed batch");
        Ok(())
    }

    async fn load_config(&self) -> Result<QueueConfig> {
        Ok(self.collection.read().await.config())
    }

    async fn save_config(&self, config: QueueConfig) -> Result<()> {
        self.write_through(|c| {
            c.set_config(config);
            Ok(())
        })
        .await
    }
}
