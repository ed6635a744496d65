//! Request DTOs for the API.
//!
//! Every field is optional on the wire so that a missing field becomes a
//! 400 with a clear message instead of a deserializer rejection.

use serde::Deserialize;
use trackqueue_models::SubmissionId;

use crate::error::{ApiError, Result};

/// Returns the id in `value`, or a `BadRequest` naming `field`.
pub fn required_id(field: &str, value: Option<&str>) -> Result<SubmissionId> {
    match value.map(str::trim) {
        Some(id) if !id.is_empty() => Ok(SubmissionId::from(id)),
        _ => Err(ApiError::BadRequest(format!("{} is required", field))),
    }
}

/// Create submission request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CreateSubmissionRequest {
    /// SoundCloud track URL.
    pub soundcloud_link: Option<String>,
    /// Optional contact email.
    pub email: Option<String>,
    /// Priority submission flag.
    pub priority: Option<bool>,
}

/// Delete submission request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteSubmissionRequest {
    pub id: Option<String>,
}

/// Move-after request: place `submission_id` right after `target_id`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MoveAfterRequest {
    pub submission_id: Option<String>,
    pub target_id: Option<String>,
}

/// Move-to-top request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MoveToTopRequest {
    pub submission_id: Option<String>,
}

/// Swap reorder request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReorderRequest {
    pub current_id: Option<String>,
    pub target_id: Option<String>,
}

/// Queue config update request.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateConfigRequest {
    pub submission_enabled: Option<bool>,
}
