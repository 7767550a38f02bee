use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use galleria_core::error::CoreError;
use serde_json::json;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds request-validation
/// failures. Implements [`IntoResponse`] to produce consistent JSON error
/// responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `galleria_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A request body that failed its `validator` constraints.
    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] validator::ValidationErrors),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Core(CoreError::Validation(msg)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::InvalidRequest(errors) => {
                tracing::debug!(%errors, "Rejected invalid request body");
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", errors.to_string())
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
