//! Write batches: all-or-nothing groups of document mutations.

use trackqueue_models::{SubmissionId, SubmissionPatch};

use crate::error::{PersistenceError, Result};

/// Maximum number of mutations a single batch commit may carry.
pub const MAX_BATCH_WRITES: usize = 500;

/// A single mutation inside a [`WriteBatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum BatchOp {
    /// Patch fields of an existing document. Fails the batch if it is missing.
    Update {
        id: SubmissionId,
        patch: SubmissionPatch,
    },
    /// Remove a document. Missing documents are ignored.
    Delete { id: SubmissionId },
}

impl BatchOp {
    /// Returns the id of the document this mutation targets.
    pub fn id(&self) -> &SubmissionId {
        match self {
            BatchOp::Update { id, .. } | BatchOp::Delete { id } => id,
        }
    }
}

/// An ordered group of mutations committed atomically by a store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WriteBatch {
    ops: Vec<BatchOp>,
}

impl WriteBatch {
    /// Creates an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a field update.
    pub fn update(&mut self, id: SubmissionId, patch: SubmissionPatch) -> &mut Self {
        self.ops.push(BatchOp::Update { id, patch });
        self
    }

    /// Queues a delete.
    pub fn delete(&mut self, id: SubmissionId) -> &mut Self {
        self.ops.push(BatchOp::Delete { id });
        self
    }

    /// Returns the queued mutations in order.
    pub fn ops(&self) -> &[BatchOp] {
        &self.ops
    }

    /// Returns the number of queued mutations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns true if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Rejects batches above [`MAX_BATCH_WRITES`].
    pub fn check_size(&self) -> Result<()> {
        if self.ops.len() > MAX_BATCH_WRITES {
            return Err(PersistenceError::BatchTooLarge {
                len: self.ops.len(),
                max: MAX_BATCH_WRITES,
            });
        }
        Ok(())
    }
}
