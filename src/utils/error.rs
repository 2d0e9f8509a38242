//! Unified error handling
//!
//! [`AppError`] is the application error enum; every handler returns
//! [`AppResult`] and the [`IntoResponse`] impl maps each category to its own
//! status code:
//!
//! | category | status |
//! |----------|--------|
//! | Validation (bad payload, malformed id) | 400 |
//! | NotFound | 404 |
//! | InsufficientStock | 400 |
//! | Database / Internal | 500 |
//!
//! Error bodies carry a single human-readable `detail` string and nothing
//! else. The cause of a 500 is logged, never sent to the caller.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::{error, warn};

use crate::db::repository::RepoError;

/// Error response body
///
/// ```json
/// { "detail": "Producto no encontrado" }
/// ```
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// Application error enum
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed payload or identifier (400)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Requested document does not exist (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Purchase quantity exceeds available stock (400)
    #[error("Insufficient stock: {0}")]
    InsufficientStock(String),

    /// Store/driver failure (500)
    #[error("Database error: {0}")]
    Database(String),

    /// Any other failure (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn insufficient_stock(msg: impl Into<String>) -> Self {
        Self::InsufficientStock(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::Validation(msg) => AppError::Validation(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            AppError::Validation(msg) => {
                warn!(target: "catalog", detail = %msg, "Validation rejected");
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::NotFound(msg) => {
                warn!(target: "catalog", detail = %msg, "Resource not found");
                (StatusCode::NOT_FOUND, msg)
            }
            AppError::InsufficientStock(msg) => {
                warn!(target: "catalog", detail = %msg, "Insufficient stock");
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor".to_string(),
                )
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error interno del servidor".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

/// Result type for handlers
pub type AppResult<T> = Result<T, AppError>;
