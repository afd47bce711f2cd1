//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Catalog API                        │
//! │                                                                         │
//! │  Handler: Result<T, ApiError>                                          │
//! │         │                                                               │
//! │         ├── DbError (repository) ───────────────────────┐              │
//! │         │                                               │              │
//! │         ├── CoreError::Storage(Box<DbError>) ─ downcast ┤              │
//! │         │                                               ▼              │
//! │         ├── CoreError::ProductNotFound ──────────► ApiError            │
//! │         ├── CoreError::MissingParameter ─────────►   │                 │
//! │         ├── ValidationError ─────────────────────►   │                 │
//! │         └── JSON / query / path rejection ───────►   │                 │
//! │                                                      ▼                 │
//! │                              status + {"success":false,"code","message"}│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Internal failures are logged with detail and reported with a generic
//! message.

use aurum_core::{CoreError, ValidationError};
use aurum_db::DbError;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::json;

/// API error returned from handlers.
///
/// ## Serialization
/// ```json
/// { "success": false, "code": "NOT_FOUND", "message": "Product not found: 7" }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed (400)
    ValidationError,

    /// Required query parameter absent (400)
    MissingParameter,

    /// Stored data produced a non-finite pricing input (500)
    InvalidInput,

    /// Unique constraint hit (409)
    Conflict,

    /// Database unreachable or pool exhausted (503)
    DatabaseUnavailable,

    /// Database operation failed (500)
    DatabaseError,

    /// Missing or invalid token (401)
    Unauthorized,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::ValidationError | ErrorCode::MissingParameter => StatusCode::BAD_REQUEST,
            ErrorCode::Conflict => StatusCode::CONFLICT,
            ErrorCode::DatabaseUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::InvalidInput | ErrorCode::DatabaseError | ErrorCode::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Unauthorized, message)
    }

    /// Creates an internal error. The detail is logged, not returned.
    pub fn internal(detail: impl std::fmt::Display) -> Self {
        tracing::error!(error = %detail, "Internal error");
        ApiError::new(ErrorCode::Internal, "An internal error occurred")
    }
}

/// Result type for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "success": false,
            "code": self.code,
            "message": self.message,
        });

        (self.code.status(), Json(body)).into_response()
    }
}

// =============================================================================
// Conversions
// =============================================================================

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => ApiError::not_found(&entity, id),
            DbError::UniqueViolation { field } => {
                ApiError::new(ErrorCode::Conflict, format!("Duplicate value for {}", field))
            }
            DbError::ForeignKeyViolation { message } => {
                tracing::warn!(%message, "Foreign key violation");
                ApiError::validation("Invalid reference")
            }
            DbError::CheckViolation { message } => {
                tracing::warn!(%message, "Check constraint violation");
                ApiError::validation("Value violates a catalog constraint")
            }
            err @ (DbError::ConnectionFailed(_) | DbError::PoolExhausted) => {
                tracing::error!(error = %err, "Database unavailable");
                ApiError::new(ErrorCode::DatabaseUnavailable, "Database unavailable")
            }
            err @ (DbError::MigrationFailed(_) | DbError::QueryFailed(_) | DbError::Internal(_)) => {
                // Log the actual error but return a generic message
                tracing::error!(error = %err, "Database operation failed");
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => ApiError::not_found("Product", id),
            err @ CoreError::MissingParameter { .. } => {
                ApiError::new(ErrorCode::MissingParameter, err.to_string())
            }
            err @ CoreError::InvalidInput { .. } => {
                tracing::error!(error = %err, "Non-finite pricing input from storage");
                ApiError::new(ErrorCode::InvalidInput, err.to_string())
            }
            CoreError::Storage(source) => match source.downcast::<DbError>() {
                Ok(db_err) => ApiError::from(*db_err),
                Err(other) => ApiError::internal(other),
            },
            CoreError::Validation(v) => ApiError::from(v),
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}
