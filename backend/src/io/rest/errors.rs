//! Error responses for the REST layer.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::ErrorResponse;
use tracing::error;

use crate::domain::models::todo::TodoValidationError;
use crate::domain::TodoServiceError;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("Todo not found")]
    NotFound,

    /// Generic message only; the cause is logged, never returned
    #[error("{0}")]
    Internal(&'static str),
}

impl ApiError {
    /// Translate a service failure, logging storage errors with `context`.
    /// `context` doubles as the message returned to the client.
    pub fn from_service(err: TodoServiceError, context: &'static str) -> Self {
        match err {
            TodoServiceError::NotFound(_) => ApiError::NotFound,
            TodoServiceError::Storage(e) => {
                error!("{}: {}", context, e);
                ApiError::Internal(context)
            }
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidInput(_) => "INVALID_INPUT",
            ApiError::NotFound => "NOT_FOUND",
            ApiError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<TodoValidationError> for ApiError {
    fn from(err: TodoValidationError) -> Self {
        ApiError::InvalidInput(err.to_string())
    }
}

// Axum answers some body errors with 415/422; this API reports them all as 400.
impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(_: PathRejection) -> Self {
        ApiError::from(TodoValidationError::InvalidId)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: self.to_string(),
            code: self.code().to_string(),
        };
        (status, Json(body)).into_response()
    }
}
