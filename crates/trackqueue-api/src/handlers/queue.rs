//! Moderation handlers: delete, clear, and reordering.
//!
//! Unreadable bodies fail during extraction. Past that, roles are checked
//! first, then required fields, so a rejected request never reaches the store.

use axum::{extract::State, Json};
use tracing::info;

use crate::auth::Caller;
use crate::error::Result;
use crate::extract::ApiJson;
use crate::state::AppState;
use crate::types::{
    required_id, ClearResponse, DeleteSubmissionRequest, MoveAfterRequest, MoveToTopRequest,
    ReorderRequest, SuccessResponse,
};

/// POST /api/queue/delete - Remove one submission (admin).
pub async fn delete_submission(
    State(state): State<AppState>,
    caller: Caller,
    ApiJson(req): ApiJson<DeleteSubmissionRequest>,
) -> Result<Json<SuccessResponse>> {
    caller.require_admin()?;
    let id = required_id("id", req.id.as_deref())?;

    state.queue.delete(&id).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// POST /api/queue/clear - Remove every submission (admin or channel owner).
pub async fn clear_queue(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<Json<ClearResponse>> {
    caller.require_moderator()?;

    let deleted = state.queue.clear_all().await?;
    info!(deleted, by_admin = caller.is_admin, "Queue cleared via API");
    Ok(Json(ClearResponse {
        success: true,
        deleted,
    }))
}

/// POST /api/queue/move-after - Place a submission right after another (admin).
pub async fn move_after(
    State(state): State<AppState>,
    caller: Caller,
    ApiJson(req): ApiJson<MoveAfterRequest>,
) -> Result<Json<SuccessResponse>> {
    caller.require_admin()?;
    let id = required_id("submissionId", req.submission_id.as_deref())?;
    let target = required_id("targetId", req.target_id.as_deref())?;

    state.queue.move_after(&id, &target).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// POST /api/queue/move-to-top - Put a submission at the front (admin).
pub async fn move_to_top(
    State(state): State<AppState>,
    caller: Caller,
    ApiJson(req): ApiJson<MoveToTopRequest>,
) -> Result<Json<SuccessResponse>> {
    caller.require_admin()?;
    let id = required_id("submissionId", req.submission_id.as_deref())?;

    state.queue.move_to_top(&id).await?;
    Ok(Json(SuccessResponse::ok()))
}

/// POST /api/queue/reorder - Swap the positions of two submissions (admin).
pub async fn reorder(
    State(state): State<AppState>,
    caller: Caller,
    ApiJson(req): ApiJson<ReorderRequest>,
) -> Result<Json<SuccessResponse>> {
    caller.require_admin()?;
    let current = required_id("currentId", req.current_id.as_deref())?;
    let target = required_id("targetId", req.target_id.as_deref())?;

    state.queue.swap_reorder(&current, &target).await?;
    Ok(Json(SuccessResponse::ok()))
}
