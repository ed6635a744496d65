//! In-memory document collection shared by the store backends.

use std::collections::{HashMap, HashSet};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use trackqueue_models::{NewSubmission, QueueConfig, Submission, SubmissionId, SubmissionPatch};

use crate::batch::{BatchOp, WriteBatch};
use crate::error::{PersistenceError, Result};

/// Submissions keyed by id plus the config singleton.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    submissions: HashMap<SubmissionId, Submission>,
    config: QueueConfig,
}

/// On-disk form of a [`Collection`].
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub submissions: Vec<Submission>,
    #[serde(default)]
    pub config: QueueConfig,
}

impl Collection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a new submission under a fresh id.
    pub fn insert(&mut self, new: NewSubmission) -> Submission {
        let mut id = SubmissionId::generate();
        while self.submissions.contains_key(&id) {
            id = SubmissionId::generate();
        }
        let submission = Submission::from_new(id.clone(), new, Utc::now());
        self.submissions.insert(id, submission.clone());
        submission
    }

    pub fn get(&self, id: &SubmissionId) -> Option<Submission> {
        self.submissions.get(id).cloned()
    }

    pub fn scan(&self) -> Vec<Submission> {
        self.submissions.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.submissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.submissions.is_empty()
    }

    /// Patches an existing submission.
    pub fn update(&mut self, id: &SubmissionId, patch: &SubmissionPatch) -> Result<()> {
        let submission = self
            .submissions
            .get_mut(id)
            .ok_or_else(|| PersistenceError::submission_not_found(id))?;
        submission.apply(patch);
        Ok(())
    }

    /// Removes a submission, returning whether it existed.
    pub fn remove(&mut self, id: &SubmissionId) -> bool {
        self.submissions.remove(id).is_some()
    }

    /// Applies every mutation of a batch, or none of them.
    pub fn apply(&mut self, batch: &WriteBatch) -> Result<()> {
        batch.check_size()?;

        // Validate against the state the batch itself produces, then mutate.
        let mut deleted: HashSet<&SubmissionId> = HashSet::new();
        for op in batch.ops() {
            match op {
                BatchOp::Update { id, .. } => {
                    if deleted.contains(id) || !self.submissions.contains_key(id) {
                        return Err(PersistenceError::submission_not_found(id));
                    }
                }
                BatchOp::Delete { id } => {
                    deleted.insert(id);
                }
            }
        }

        for op in batch.ops() {
            match op {
                BatchOp::Update { id, patch } => self.update(id, patch)?,
                BatchOp::Delete { id } => {
                    self.remove(id);
                }
            }
        }
        Ok(())
    }

    pub fn config(&self) -> QueueConfig {
        self.config
    }

    pub fn set_config(&mut self, config: QueueConfig) {
        self.config = config;
    }

    pub fn to_snapshot(&self) -> Snapshot {
        let mut submissions = self.scan();
        submissions.sort_by(|a, b| a.id.cmp(&b.id));
        Snapshot {
            submissions,
            config: self.config,
        }
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            submissions: snapshot
                .submissions
                .into_iter()
                .map(|s| (s.id.clone(), s))
                .collect(),
            config: snapshot.config,
        }
    }
}
