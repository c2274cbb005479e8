use axum::{Json, http::StatusCode, response::IntoResponse};
use serde_json::json;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum VitrineError {
    #[error("Unauthorized")]
    Unauthorized,

    #[error("unknown content type: {0}")]
    UnknownEntity(String),

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Payload(String),

    #[error("content storage is not configured")]
    StorageUnconfigured,

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Ractor error: {0}")]
    RactorError(String),

    #[error("Mail delivery error: {0}")]
    MailError(String),

    #[error("HTTP request error: {0}")]
    ReqwestError(#[from] reqwest::Error),
}

impl IntoResponse for VitrineError {
    fn into_response(self) -> axum::response::Response {
        match self {
            VitrineError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Unauthorized" })),
            )
                .into_response(),

            VitrineError::UnknownEntity(slug) => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": format!("unknown content type: {slug}") })),
            )
                .into_response(),

            VitrineError::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "message": message })),
            )
                .into_response(),

            // Write-path failures surface the raw message; read paths degrade
            // to empty results before reaching here.
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": other.to_string() })),
            )
                .into_response(),
        }
    }
}
