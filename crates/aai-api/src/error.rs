use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use aai_scoring::ScoringError;
use aai_scoring::validate::Violation;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    /// Well-formed request whose scores fail validation.
    Unprocessable {
        message: String,
        violations: Vec<Violation>,
    },
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    violations: Vec<Violation>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, violations) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, Vec::new()),
            ApiError::Unprocessable {
                message,
                violations,
            } => (StatusCode::UNPROCESSABLE_ENTITY, message, violations),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    Vec::new(),
                )
            }
        };

        (
            status,
            Json(ErrorBody {
                error: message,
                violations,
            }),
        )
            .into_response()
    }
}

impl From<ScoringError> for ApiError {
    fn from(e: ScoringError) -> Self {
        match e {
            ScoringError::InvalidInput { .. } => ApiError::Unprocessable {
                message: e.to_string(),
                violations: e.violations().to_vec(),
            },
            other @ ScoringError::InvariantViolation { .. } => {
                ApiError::Internal(other.to_string())
            }
        }
    }
}
