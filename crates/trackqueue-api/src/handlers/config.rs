//! Queue config handlers.

use axum::{extract::State, Json};

use crate::auth::Caller;
use crate::error::{ApiError, Result};
use crate::extract::ApiJson;
use crate::state::AppState;
use crate::types::{ConfigResponse, UpdateConfigRequest};

/// GET /api/config - Whether intake is open.
pub async fn get_config(State(state): State<AppState>) -> Result<Json<ConfigResponse>> {
    let config = state.queue.config().await?;
    Ok(Json(ConfigResponse::from(config)))
}

/// PUT /api/config - Open or close intake (admin).
pub async fn update_config(
    State(state): State<AppState>,
    caller: Caller,
    ApiJson(req): ApiJson<UpdateConfigRequest>,
) -> Result<Json<ConfigResponse>> {
    caller.require_admin()?;
    let enabled = req
        .submission_enabled
        .ok_or_else(|| ApiError::BadRequest("submissionEnabled is required".into()))?;

    let config = state.queue.set_submissions_enabled(enabled).await?;
    Ok(Json(ConfigResponse::from(config)))
}
