//! Request extractors.

use axum::extract::FromRequest;

use crate::error::ApiError;

/// JSON body extractor that rejects with [`ApiError`].
///
/// A missing body, a wrong content type, malformed JSON, or a mistyped
/// field all become a 400 with the usual `success`/`message` body.
#[derive(Debug, Clone, Copy, Default, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
