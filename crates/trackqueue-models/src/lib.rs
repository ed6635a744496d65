//! Core data models for TrackQueue.
//!
//! This crate provides the types shared by every TrackQueue crate:
//! submissions, their ids, the queue-wide config singleton, and the
//! order key rules used to sort the queue.

pub mod config;
pub mod ids;
pub mod order;
pub mod submission;

// Re-export main types
pub use config::QueueConfig;
pub use ids::SubmissionId;
pub use order::{compare_queue_order, compare_queue_order_at, now_millis, OrderKey};
pub use submission::{NewSubmission, Submission, SubmissionPatch};
