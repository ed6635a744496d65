//! API error types.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};
use trackqueue_engine::QueueError;

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Message returned for failures whose detail only goes to the log.
const INTERNAL_MESSAGE: &str = "the queue store request failed";

/// API error type for consistent error responses.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller lacks the required role.
    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Bad request - missing or invalid input.
    #[error("bad request: {0}")]
    BadRequest(String),

    /// Resource not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// Action not allowed right now.
    #[error("forbidden: {0}")]
    Forbidden(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_client_error() {
            warn!(status = status.as_u16(), error = %self, "Request rejected");
        }
        let body = Json(json!({
            "success": false,
            "message": self.to_string()
        }));
        (status, body).into_response()
    }
}

impl From<QueueError> for ApiError {
    fn from(err: QueueError) -> Self {
        match err {
            QueueError::NotFound(id) => ApiError::NotFound(format!("submission not found: {}", id)),
            QueueError::InvalidInput(msg) => ApiError::BadRequest(msg),
            QueueError::SubmissionsClosed => ApiError::Forbidden(err.to_string()),
            QueueError::Persistence(source) => {
                error!(error = %source, "Queue store failure");
                ApiError::Internal(INTERNAL_MESSAGE.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trackqueue_persistence::PersistenceError;

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(
            ApiError::Unauthorized("test".into()).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            ApiError::BadRequest("test".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::NotFound("test".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Forbidden("test".into()).status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ApiError::Internal("test".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::NotFound("sub-1".into());
        assert_eq!(err.to_string(), "not found: sub-1");
    }

    #[test]
    fn test_queue_errors_map_to_taxonomy() {
        let not_found: ApiError = QueueError::NotFound("a".into()).into();
        assert!(matches!(not_found, ApiError::NotFound(_)));

        let invalid: ApiError = QueueError::InvalidInput("bad link".into()).into();
        assert!(matches!(invalid, ApiError::BadRequest(ref m) if m == "bad link"));

        let closed: ApiError = QueueError::SubmissionsClosed.into();
        assert_eq!(closed.status_code(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_store_failure_hides_detail() {
        let err: ApiError =
            QueueError::Persistence(PersistenceError::Unavailable("disk on fire".into())).into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(!err.to_string().contains("disk on fire"));
    }
}
