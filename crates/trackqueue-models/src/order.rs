//! Order keys for the submission queue.
//!
//! The queue uses a sparse ordering scheme: every submission carries a real
//! valued key and a move writes one new key between two neighbours instead
//! of renumbering the queue. A submission without a stored key falls back
//! to its creation time in epoch milliseconds, and a submission without
//! either falls back to "now" at evaluation time.
//!
//! Display order is `priority` first (priority submissions on top), then the
//! effective key ascending.

use std::cmp::Ordering;

use chrono::Utc;

use crate::submission::Submission;

/// Current time in epoch milliseconds, as an order key.
pub fn now_millis() -> f64 {
    Utc::now().timestamp_millis() as f64
}

impl Submission {
    /// Returns the stored order key if it is a usable number.
    pub fn stored_order(&self) -> Option<f64> {
        self.order.filter(|order| order.is_finite())
    }

    /// Returns the effective order key, using `now` as the last fallback.
    pub fn effective_order_at(&self, now: f64) -> f64 {
        self.stored_order()
            .or_else(|| self.timestamp.map(|ts| ts.timestamp_millis() as f64))
            .unwrap_or(now)
    }

    /// Returns the effective order key, falling back to the current time.
    pub fn effective_order(&self) -> f64 {
        self.effective_order_at(now_millis())
    }
}

/// The display sort key of a submission.
#[derive(Debug, Clone, Copy)]
pub struct OrderKey {
    pub priority: bool,
    pub order: f64,
}

impl OrderKey {
    /// Derives the key of a submission, using `now` for records with no key or timestamp.
    pub fn of(submission: &Submission, now: f64) -> Self {
        Self {
            priority: submission.priority,
            order: submission.effective_order_at(now),
        }
    }
}

impl PartialEq for OrderKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrderKey {}

impl PartialOrd for OrderKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OrderKey {
    fn cmp(&self, other: &Self) -> Ordering {
        // Priority first, so `true` must compare as smaller
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| self.order.total_cmp(&other.order))
    }
}

/// Compares two submissions in display order with a fixed "now".
pub fn compare_queue_order_at(a: &Submission, b: &Submission, now: f64) -> Ordering {
    OrderKey::of(a, now).cmp(&OrderKey::of(b, now))
}

/// Compares two submissions in display order.
pub fn compare_queue_order(a: &Submission, b: &Submission) -> Ordering {
    compare_queue_order_at(a, b, now_millis())
}
