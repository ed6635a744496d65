//! Submission queue engine for TrackQueue.
//!
//! This crate provides [`SubmissionQueue`], which owns every operation that
//! reads or reorders the queue:
//! - Ordering: move-to-top, move-after, and pairwise swap on sparse order keys
//! - Bulk clear in batches of at most 500 deletes per commit
//! - Single delete
//! - Intake of new submissions, gated by the queue config
//! - The sorted read projection used for display
//!
//! # Concurrency
//!
//! The engine keeps no state of its own. Move-to-top and move-after scan,
//! compute, then write, and another request may change the neighbouring keys
//! in between, so a concurrent move can land on a stale position. Swap and
//! each clear batch are atomic only within their single commit.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use trackqueue_engine::SubmissionQueue;
//! use trackqueue_models::NewSubmission;
//! use trackqueue_persistence::MemoryStore;
//!
//! # async fn example() -> trackqueue_engine::Result<()> {
//! let queue = SubmissionQueue::new(Arc::new(MemoryStore::new()));
//!
//! let first = queue.submit(NewSubmission::new("https://soundcloud.com/a/one")).await?;
//! let second = queue.submit(NewSubmission::new("https://soundcloud.com/a/two")).await?;
//!
//! queue.move_to_top(&second.id).await?;
//! queue.move_after(&first.id, &second.id).await?;
//!
//! for entry in queue.list().await? {
//!     println!("{} {}", entry.position, entry.submission.soundcloud_link);
//! }
//! # Ok(())
//! # }
//! ```

pub mod clear;
pub mod error;
pub mod intake;
pub mod ordering;
pub mod projection;
pub mod queue;

pub use clear::delete_batches;
pub use error::{QueueError, Result};
pub use ordering::{order_after, rank_by_order, top_order, RankedKey, TOP_FLOOR, TOP_OFFSET};
pub use projection::QueueEntry;
pub use queue::SubmissionQueue;

#[cfg(test)]
pub(crate) mod test_support;
