//! Response DTOs for the API.

use chrono::{DateTime, Utc};
use serde::Serialize;

use trackqueue_engine::QueueEntry;
use trackqueue_models::QueueConfig;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_seconds: u64,
}

/// Generic success response.
#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

/// Clear-all response.
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    pub success: bool,
    /// Number of submissions that existed when the clear started.
    pub deleted: usize,
}

/// Created response with ID.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    /// ID of the created submission.
    pub id: String,
}

/// A submission at its queue position.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionView {
    pub id: String,
    pub position: usize,
    pub soundcloud_link: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub priority: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    pub effective_order: f64,
}

impl From<&QueueEntry> for SubmissionView {
    fn from(entry: &QueueEntry) -> Self {
        let sub = &entry.submission;
        Self {
            id: sub.id.as_str().to_string(),
            position: entry.position,
            soundcloud_link: sub.soundcloud_link.clone(),
            email: sub.email.clone(),
            priority: sub.priority,
            order: sub.stored_order(),
            timestamp: sub.timestamp,
            effective_order: entry.effective_order,
        }
    }
}

/// Queue listing response.
#[derive(Debug, Clone, Serialize)]
pub struct SubmissionListResponse {
    pub success: bool,
    pub submissions: Vec<SubmissionView>,
    pub total: usize,
}

/// Queue config response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub success: bool,
    pub submission_enabled: bool,
}

impl From<QueueConfig> for ConfigResponse {
    fn from(config: QueueConfig) -> Self {
        Self {
            success: true,
            submission_enabled: config.submission_enabled,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackqueue_models::{NewSubmission, Submission, SubmissionId};

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
            uptime_seconds: 100,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(json.contains("\"uptime_seconds\":100"));
    }

    #[test]
    fn test_submission_view_from_entry() {
        let mut submission = Submission::from_new(
            SubmissionId::from("sub-1"),
            NewSubmission::new("https://soundcloud.com/a/b").with_priority(true),
            Utc::now(),
        );
        submission.order = Some(-1_000_000.0);
        let entry = QueueEntry {
            position: 0,
            effective_order: -1_000_000.0,
            submission,
        };

        let json = serde_json::to_value(SubmissionView::from(&entry)).unwrap();
        assert_eq!(json["id"], "sub-1");
        assert_eq!(json["soundcloudLink"], "https://soundcloud.com/a/b");
        assert_eq!(json["priority"], true);
        assert_eq!(json["effectiveOrder"], -1_000_000.0);
        assert!(json.get("email").is_none());
    }

    #[test]
    fn test_config_response_camel_case() {
        let json = serde_json::to_string(&ConfigResponse::from(QueueConfig::default())).unwrap();
        assert_eq!(json, r#"{"success":true,"submissionEnabled":true}"#);
    }
}
