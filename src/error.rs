use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::db::mood_log::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    InvalidBody(String),

    #[error("{0}")]
    LogUnavailable(String),

    #[error("Mood log is corrupt: {0}")]
    CorruptLog(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Unavailable(cause) => AppError::LogUnavailable(cause),
            StoreError::Corrupt(e) => AppError::CorruptLog(e.to_string()),
            StoreError::Io(e) => AppError::Io(e),
            StoreError::Encode(e) => AppError::Internal(e.into()),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::InvalidBody(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::InvalidBody(msg) => {
                tracing::debug!(error = %msg, "Rejected request body");
                (StatusCode::BAD_REQUEST, msg.clone())
            }
            AppError::LogUnavailable(cause) => {
                tracing::error!(error = %cause, "Mood log unavailable");
                (StatusCode::INTERNAL_SERVER_ERROR, cause.clone())
            }
            AppError::CorruptLog(cause) => {
                tracing::error!(error = %cause, "Mood log corrupt on write");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
            AppError::Io(e) => {
                tracing::error!(error = %e, "I/O error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!(error = %e, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
