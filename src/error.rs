//! Structured error types for API responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;

/// Error codes for programmatic error handling.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation errors (400)
    MissingRequiredField,
    InvalidFieldValue,
    EmptyUpdate,

    // Not found errors (404)
    TaskNotFound,

    // Internal errors (500)
    DatabaseError,
}

impl ErrorCode {
    /// HTTP status code this error maps to.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::MissingRequiredField
            | ErrorCode::InvalidFieldValue
            | ErrorCode::EmptyUpdate => StatusCode::BAD_REQUEST,
            ErrorCode::TaskNotFound => StatusCode::NOT_FOUND,
            ErrorCode::DatabaseError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Structured error returned by API handlers.
#[derive(Debug, Error, Serialize)]
#[error("{message}")]
pub struct ApiError {
    pub code: ErrorCode,
    pub message: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    // Convenience constructors

    pub fn missing_field(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingRequiredField,
            format!("{} is required", field),
        )
    }

    pub fn invalid_value(field: &str, reason: &str) -> Self {
        Self::new(
            ErrorCode::InvalidFieldValue,
            format!("{}: {}", field, reason),
        )
    }

    pub fn empty_update() -> Self {
        Self::new(
            ErrorCode::EmptyUpdate,
            "at least one of description or completed must be supplied",
        )
    }

    pub fn task_not_found(task_id: i64) -> Self {
        Self::new(
            ErrorCode::TaskNotFound,
            format!("Task not found: {}", task_id),
        )
    }

    /// Store failure. The cause is logged; the client gets a generic message.
    pub fn database(err: impl std::fmt::Display) -> Self {
        tracing::error!(error = %err, "Database operation failed");
        Self::new(ErrorCode::DatabaseError, "database operation failed")
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::database(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.code.status(), Json(self)).into_response()
    }
}
