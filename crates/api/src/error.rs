use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use bookstore_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors plus raw database failures, and
/// implements [`IntoResponse`] to produce the `{ "error": message }` body
/// the REST surface promises. The underlying message is exposed as-is;
/// this service has no internal detail worth redacting.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `bookstore_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, core.to_string()),
                CoreError::ResourceExhausted(_) => {
                    (StatusCode::SERVICE_UNAVAILABLE, core.to_string())
                }
                CoreError::Mapping(_) | CoreError::Write(_) | CoreError::Internal(_) => {
                    tracing::error!(error = %core, "request failed");
                    (StatusCode::INTERNAL_SERVER_ERROR, core.to_string())
                }
            },
            AppError::Database(err) => classify_sqlx_error(err),
        };

        let body = json!({ "error": message });
        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// Pool saturation maps to 503 (the caller sees resource exhaustion rather
/// than an open-ended wait); everything else is a 500 carrying the driver
/// message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::PoolTimedOut => (
            StatusCode::SERVICE_UNAVAILABLE,
            CoreError::ResourceExhausted("connection pool timed out".into()).to_string(),
        ),
        other => {
            tracing::error!(error = %other, "database error");
            (StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
        }
    }
}
