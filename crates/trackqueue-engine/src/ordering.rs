//! Sparse-key reordering: move-to-top, move-after, and swap.
//!
//! Every move writes exactly one new key (two for a swap) instead of
//! renumbering the queue. Keys are plain `f64`s:
//! - move-to-top subtracts a large fixed offset from the lowest key
//! - move-after takes the midpoint between the target and its successor
//!
//! Neither is ever compacted. Repeated top-moves grow the key magnitude
//! without bound, and repeated inserts into the same gap halve it until the
//! midpoint can no longer be told apart from an endpoint.

use std::cmp::Ordering;

use tracing::info;
use trackqueue_models::{now_millis, Submission, SubmissionId, SubmissionPatch};

use crate::error::{QueueError, Result};
use crate::queue::SubmissionQueue;

/// Distance a top-moved submission is placed below the current lowest key.
pub const TOP_OFFSET: f64 = 1_000_000.0;

/// Baseline for the lowest key, so a top-move always lands at or below `-TOP_OFFSET`.
///
/// With keys 10/20/30 a top-move gives -1,000,000, not 10 - 1,000,000.
/// The floor is applied even when every key is positive.
pub const TOP_FLOOR: f64 = 0.0;

/// A submission id paired with its effective order key.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedKey {
    pub id: SubmissionId,
    pub order: f64,
}

/// Key for a submission moved in front of every key in `keys`.
pub fn top_order(keys: impl IntoIterator<Item = f64>) -> f64 {
    keys.into_iter().fold(TOP_FLOOR, f64::min) - TOP_OFFSET
}

/// Ranks submissions by effective order alone, ignoring the priority tier.
///
/// Ties are broken by id so the ranking does not depend on scan order.
pub fn rank_by_order(submissions: &[Submission], now: f64) -> Vec<RankedKey> {
    let mut ranked: Vec<RankedKey> = submissions
        .iter()
        .map(|s| RankedKey {
            id: s.id.clone(),
            order: s.effective_order_at(now),
        })
        .collect();

    ranked.sort_by(|a, b| match a.order.total_cmp(&b.order) {
        Ordering::Equal => a.id.cmp(&b.id),
        ord => ord,
    });

    ranked
}

/// Key that places a submission directly after `target` in `ranked`.
///
/// Returns the midpoint between the target and its successor, or the
/// target's key plus one if it is last. `None` if the target is absent.
pub fn order_after(ranked: &[RankedKey], target: &SubmissionId) -> Option<f64> {
    let index = ranked.iter().position(|r| &r.id == target)?;
    let target_order = ranked[index].order;

    Some(match ranked.get(index + 1) {
        Some(next) => (target_order + next.order) / 2.0,
        None => target_order + 1.0,
    })
}

impl SubmissionQueue {
    /// Moves a submission to the front of the queue.
    ///
    /// The submission is promoted to the priority tier and given a key
    /// [`TOP_OFFSET`] below the lowest key at scan time (floored at
    /// [`TOP_FLOOR`]). Returns the new key.
    pub async fn move_to_top(&self, id: &SubmissionId) -> Result<f64> {
        self.get(id).await?;

        let now = now_millis();
        let submissions = self.store.scan_all().await?;
        let order = top_order(submissions.iter().map(|s| s.effective_order_at(now)));

        self.store
            .update_fields(id, SubmissionPatch::new().with_order(order).with_priority(true))
            .await?;

        info!(id = %id, order, "Moved submission to top");
        Ok(order)
    }

    /// Moves a submission to directly follow `target_id`.
    ///
    /// Positions come from the raw order keys of the whole collection; the
    /// priority tier used for display is not consulted. Only the moved
    /// submission is written. Returns the new key.
    pub async fn move_after(&self, id: &SubmissionId, target_id: &SubmissionId) -> Result<f64> {
        self.get(id).await?;
        self.get(target_id).await?;

        let now = now_millis();
        let submissions = self.store.scan_all().await?;
        let ranked = rank_by_order(&submissions, now);
        let order = order_after(&ranked, target_id)
            .ok_or_else(|| QueueError::NotFound(target_id.to_string()))?;

        self.store
            .update_fields(id, SubmissionPatch::new().with_order(order))
            .await?;

        info!(id = %id, target = %target_id, order, "Moved submission after target");
        Ok(order)
    }

    /// Exchanges the order keys of two submissions in one atomic batch.
    pub async fn swap_reorder(&self, current_id: &SubmissionId, target_id: &SubmissionId) -> Result<()> {
        let current = self.get(current_id).await?;
        let target = self.get(target_id).await?;

        let now = now_millis();
        let current_order = current.effective_order_at(now);
        let target_order = target.effective_order_at(now);

        let mut batch = self.store.batch();
        batch
            .update(current.id, SubmissionPatch::new().with_order(target_order))
            .update(target.id, SubmissionPatch::new().with_order(current_order));
        self.store.commit(batch).await?;

        info!(
            current = %current_id,
            target = %target_id,
            current_order = target_order,
            target_order = current_order,
            "Swapped submission order"
        );
        Ok(())
    }
}
