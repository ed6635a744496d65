//! Public queue handlers: listing and intake.

use axum::{extract::State, http::StatusCode, Json};

use trackqueue_models::NewSubmission;

use crate::error::{ApiError, Result};
use crate::extract::ApiJson;
use crate::state::AppState;
use crate::types::{
    CreateSubmissionRequest, CreatedResponse, SubmissionListResponse, SubmissionView,
};

/// GET /api/submissions - The queue in display order.
pub async fn list_submissions(State(state): State<AppState>) -> Result<Json<SubmissionListResponse>> {
    let entries = state.queue.list().await?;
    let submissions: Vec<SubmissionView> = entries.iter().map(SubmissionView::from).collect();
    let total = submissions.len();

    Ok(Json(SubmissionListResponse {
        success: true,
        submissions,
        total,
    }))
}

/// POST /api/submissions - Submit a track.
pub async fn create_submission(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<CreateSubmissionRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>)> {
    let link = req
        .soundcloud_link
        .ok_or_else(|| ApiError::BadRequest("soundcloudLink is required".into()))?;

    let new = NewSubmission {
        soundcloud_link: link,
        email: req.email,
        priority: req.priority.unwrap_or(false),
    };
    let submission = state.queue.submit(new).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            success: true,
            id: submission.id.as_str().to_string(),
        }),
    ))
}
