// src/server/error.rs
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::error;

use crate::domain::DomainError;

/// HTTP-facing error taxonomy. Internal detail is logged, never sent.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Internal(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NoteNotFound(_) => ApiError::NotFound("Note not found".to_string()),
            DomainError::EmptyNote => ApiError::BadRequest("Title or content is required".to_string()),
            DomainError::Storage(detail) => ApiError::Internal(detail),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(detail) => {
                error!(detail = %detail, "Internal error while handling request");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
