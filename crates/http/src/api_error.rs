//! Typed API error for HTTP handlers.
//!
//! Converts service errors into HTTP responses with a JSON body and the
//! matching status code.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use page_analyzer_service::ServiceError;

/// API error with HTTP status code and human-readable message.
///
/// Converts to JSON response: `{"error": "message"}`.
///
/// `Internal` logs the real error server-side and returns a static message to
/// the client, so connection details never leak.
#[derive(Debug)]
pub enum ApiError {
    /// 404 Not Found: requested URL doesn't exist.
    NotFound(String),
    /// 422 Unprocessable Entity: submitted address was rejected.
    UnprocessableEntity(String),
    /// 502 Bad Gateway: the tracked page could not be fetched.
    BadGateway(String),
    /// 500 Internal Server Error: storage failure. Details logged, not exposed.
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            Self::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            Self::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            Self::Internal(err) => {
                tracing::error!(error = ?err, "internal server error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error".to_owned())
            },
        };
        let body = serde_json::json!({"error": message});
        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        let message = err.user_message().to_owned();
        match err {
            ServiceError::Validation(_) => Self::UnprocessableEntity(message),
            ServiceError::NotFound { .. } => Self::NotFound(message),
            ServiceError::CheckFailed(_) => Self::BadGateway(message),
            ServiceError::Internal(_) => Self::Internal(err.into()),
        }
    }
}
