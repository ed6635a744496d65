//! Sorted read view of the queue.

use trackqueue_models::{compare_queue_order_at, now_millis, Submission};

use crate::error::Result;
use crate::queue::SubmissionQueue;

/// A submission at its display position.
#[derive(Debug, Clone, PartialEq)]
pub struct QueueEntry {
    /// Zero-based position in display order.
    pub position: usize,
    /// Effective order key used for sorting.
    pub effective_order: f64,
    pub submission: Submission,
}

impl SubmissionQueue {
    /// Returns the queue in display order: priority tier first, then key ascending.
    pub async fn list(&self) -> Result<Vec<QueueEntry>> {
        let now = now_millis();
        let mut submissions = self.store.scan_all().await?;
        submissions.sort_by(|a, b| compare_queue_order_at(a, b, now).then_with(|| a.id.cmp(&b.id)));

        Ok(submissions
            .into_iter()
            .enumerate()
            .map(|(position, submission)| QueueEntry {
                position,
                effective_order: submission.effective_order_at(now),
                submission,
            })
            .collect())
    }
}
