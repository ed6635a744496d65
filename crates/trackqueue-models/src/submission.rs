//! Submission types for TrackQueue.
//!
//! A submission is one track link waiting in the stream queue. Only the
//! ordering operations mutate a submission after it is created, and only
//! its `order` and `priority` fields.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::SubmissionId;

/// A track submitted to the queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    /// Unique identifier, assigned by the store on creation.
    pub id: SubmissionId,

    /// The SoundCloud track URL.
    pub soundcloud_link: String,

    /// Optional submitter contact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Priority submissions always sort above non-priority ones.
    #[serde(default)]
    pub priority: bool,

    /// Sparse order key. Lower sorts earlier; unset means `timestamp` is the key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,

    /// When the submission was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

impl Submission {
    /// Builds a stored submission from intake data.
    pub fn from_new(id: SubmissionId, new: NewSubmission, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            soundcloud_link: new.soundcloud_link,
            email: new.email,
            priority: new.priority,
            order: None,
            timestamp: Some(timestamp),
        }
    }

    /// Applies a field patch in place.
    pub fn apply(&mut self, patch: &SubmissionPatch) {
        if let Some(order) = patch.order {
            self.order = Some(order);
        }
        if let Some(priority) = patch.priority {
            self.priority = priority;
        }
    }
}

/// Intake data for a submission that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubmission {
    pub soundcloud_link: String,
    pub email: Option<String>,
    pub priority: bool,
}

impl NewSubmission {
    /// Creates a non-priority submission with no contact email.
    pub fn new(soundcloud_link: impl Into<String>) -> Self {
        Self {
            soundcloud_link: soundcloud_link.into(),
            email: None,
            priority: false,
        }
    }

    /// Sets the contact email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Sets the priority flag.
    pub fn with_priority(mut self, priority: bool) -> Self {
        self.priority = priority;
        self
    }
}

/// Partial update of the mutable fields of a submission.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SubmissionPatch {
    pub order: Option<f64>,
    pub priority: Option<bool>,
}

impl SubmissionPatch {
    /// Creates an empty patch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the order key.
    pub fn with_order(mut self, order: f64) -> Self {
        self.order = Some(order);
        self
    }

    /// Sets the priority flag.
    pub fn with_priority(mut self, priority: bool) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns true if the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.order.is_none() && self.priority.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_submission() -> Submission {
        Submission::from_new(
            SubmissionId::from("a"),
            NewSubmission::new("https://soundcloud.com/artist/track"),
            Utc::now(),
        )
    }

    #[test]
    fn test_from_new_leaves_order_unset() {
        let sub = make_submission();
        assert_eq!(sub.order, None);
        assert!(sub.timestamp.is_some());
        assert!(!sub.priority);
    }

    #[test]
    fn test_apply_patch() {
        let mut sub = make_submission();
        sub.apply(&SubmissionPatch::new().with_order(-5.0).with_priority(true));
        assert_eq!(sub.order, Some(-5.0));
        assert!(sub.priority);
    }

    #[test]
    fn test_empty_patch_changes_nothing() {
        let mut sub = make_submission();
        let before = sub.clone();
        let patch = SubmissionPatch::new();
        assert!(patch.is_empty());
        sub.apply(&patch);
        assert_eq!(sub, before);
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let mut sub = make_submission();
        sub.order = Some(10.0);
        let json = serde_json::to_value(&sub).unwrap();
        assert_eq!(json["soundcloudLink"], "https://soundcloud.com/artist/track");
        assert_eq!(json["order"], 10.0);
        assert!(json.get("email").is_none());
    }

    #[test]
    fn test_deserialize_minimal_document() {
        let json = r#"{"id": "x", "soundcloudLink": "https://soundcloud.com/a/b"}"#;
        let sub: Submission = serde_json::from_str(json).unwrap();
        assert!(!sub.priority);
        assert!(sub.order.is_none());
        assert!(sub.timestamp.is_none());
    }
}
