//! Unified error handling
//!
//! Application error type and the JSON envelope it renders into:
//! - [`AppError`] - application error enum
//! - [`AppResponse`] - error response body
//!
//! # Error codes
//!
//! | Code | Status | Meaning |
//! |------|--------|---------|
//! | E0002 | 400 | validation failed |
//! | E0003 | 404 | resource not found |
//! | E0004 | 400 | duplicate employee id |
//! | E0006 | 400 | empty update |
//! | E9002 | 500 | database error |
//! | E9003 | 500 | database not initialized |
//!
//! # Example
//!
//! ```ignore
//! Err(AppError::not_found(format!("Employee with ID '{id}' not found")))
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::db::repository::RepoError;

/// Error response body
///
/// ```json
/// {
///   "code": "E0003",
///   "message": "Employee with ID 'E1' not found"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AppResponse {
    pub code: String,
    pub message: String,
}

/// Application error enum
///
/// | Group | Variants |
/// |-------|----------|
/// | Client errors | Validation, Conflict, NotFound, EmptyUpdate |
/// | System errors | Uninitialized, Database |
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== Client errors (4xx) ==========
    #[error("Validation failed: {0}")]
    /// Malformed or out-of-range input (400)
    Validation(String),

    #[error("Resource already exists: {0}")]
    /// Duplicate identifier on create (400)
    Conflict(String),

    #[error("Resource not found: {0}")]
    /// Identifier absent (404)
    NotFound(String),

    #[error("No update fields provided.")]
    /// Update payload carried no fields (400)
    EmptyUpdate,

    // ========== System errors (5xx) ==========
    #[error("Database client not initialized")]
    /// Store accessed before startup or after shutdown (500)
    Uninitialized,

    #[error("Database error: {0}")]
    /// Unclassified persistence failure (500)
    Database(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    /// HTTP status and error code for this error
    pub fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::Validation(_) => (StatusCode::BAD_REQUEST, "E0002"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "E0003"),
            AppError::Conflict(_) => (StatusCode::BAD_REQUEST, "E0004"),
            AppError::EmptyUpdate => (StatusCode::BAD_REQUEST, "E0006"),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "E9002"),
            AppError::Uninitialized => (StatusCode::INTERNAL_SERVER_ERROR, "E9003"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        let message = match &self {
            AppError::Validation(msg) | AppError::Conflict(msg) | AppError::NotFound(msg) => {
                msg.clone()
            }
            AppError::EmptyUpdate | AppError::Uninitialized => self.to_string(),

            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                "Database error".to_string()
            }
        };

        let body = Json(AppResponse {
            code: code.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}
