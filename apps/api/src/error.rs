//! # API Error Type
//!
//! Unified error type for HTTP handlers.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in RideHub                                │
//! │                                                                         │
//! │  Handler → Service                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  ApiResult<T>                                                    │  │
//! │  │         │                                                        │  │
//! │  │  Bad JSON/form/path? ─── axum rejection ───────────┐            │  │
//! │  │  Rule violated?      ─── CoreError::AdminOnly ─────┤            │  │
//! │  │  Database failed?    ─── DbError::QueryFailed ─────┼─► ApiError │  │
//! │  │  Token bad?          ─── AuthError::ExpiredToken ──┘     │      │  │
//! │  └──────────────────────────────────────────────────────────┼──────┘  │
//! │                                                             ▼         │
//! │  HTTP 4xx/5xx  {"code": "FORBIDDEN", "detail": "Admin privileges…"}   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Internal failures are logged with their cause; the client only ever sees a
//! generic message for them.

use axum::extract::rejection::{FormRejection, JsonRejection, PathRejection};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use ridehub_core::CoreError;
use ridehub_db::DbError;

use crate::auth::AuthError;

/// Result type for handlers and services.
pub type ApiResult<T> = Result<T, ApiError>;

/// Error returned from every endpoint.
///
/// ## Serialization
/// This is what the client receives when a request fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "detail": "Vehicle not found: 12"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub detail: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Input validation failed (400)
    ValidationError,

    /// Missing or bad credentials (401)
    Unauthorized,

    /// Authenticated but not allowed (403)
    Forbidden,

    /// Resource not found (404)
    NotFound,

    /// Database operation failed (500)
    DatabaseError,

    /// Internal server error (500)
    Internal,
}

impl ErrorCode {
    /// HTTP status for this code.
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorCode::Forbidden => StatusCode::FORBIDDEN,
            ErrorCode::NotFound => StatusCode::NOT_FOUND,
            ErrorCode::DatabaseError | ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, detail: impl Into<String>) -> Self {
        ApiError {
            code,
            detail: detail.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(detail: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, detail)
    }

    /// Creates an unauthorized error.
    pub fn unauthorized(detail: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Unauthorized, detail)
    }

    /// Creates a forbidden error.
    pub fn forbidden(detail: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Forbidden, detail)
    }

    /// Creates a not found error.
    pub fn not_found(detail: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::NotFound, detail)
    }

    /// Creates an internal error.
    pub fn internal(detail: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, detail)
    }

    /// HTTP status of this error.
    pub fn status(&self) -> StatusCode {
        self.code.status()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.code, self.detail)
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let unauthorized = self.code == ErrorCode::Unauthorized;

        let mut response = (status, Json(self)).into_response();
        if unauthorized {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                HeaderValue::from_static("Bearer"),
            );
        }
        response
    }
}

/// Converts database errors to API errors.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::NotFound { entity, id } => {
                ApiError::not_found(format!("{} not found: {}", entity, id))
            }
            DbError::UniqueViolation { field } => {
                ApiError::validation(format!("{} already registered", capitalize(&field)))
            }
            DbError::ForeignKeyViolation { message } => {
                tracing::warn!("Foreign key violation: {}", message);
                ApiError::validation("Invalid reference")
            }
            DbError::CheckViolation { message } => {
                tracing::warn!("Check constraint violation: {}", message);
                ApiError::validation("Invalid value")
            }
            DbError::ConnectionFailed(e) => {
                tracing::error!("Database connection failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database connection failed")
            }
            DbError::MigrationFailed(e) => {
                tracing::error!("Database migration failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database migration failed")
            }
            DbError::QueryFailed(e) => {
                // Log the actual error but return a generic message
                tracing::error!("Database query failed: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
            DbError::PoolExhausted => {
                tracing::error!("Database pool exhausted");
                ApiError::new(ErrorCode::DatabaseError, "Database pool exhausted")
            }
            DbError::Internal(e) => {
                tracing::error!("Internal database error: {}", e);
                ApiError::new(ErrorCode::DatabaseError, "Database operation failed")
            }
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let detail = err.to_string();
        match err {
            CoreError::UserNotFound(_)
            | CoreError::VehicleNotFound(_)
            | CoreError::RentalNotFound(_) => ApiError::not_found(detail),

            CoreError::AdminOnly
            | CoreError::AdminAccountLocked
            | CoreError::NotOwner { .. } => ApiError::forbidden(detail),

            CoreError::UnknownReference { .. }
            | CoreError::EmailTaken
            | CoreError::UsernameTaken
            | CoreError::VehicleUnavailable(_)
            | CoreError::VehicleInUse(_)
            | CoreError::WrongPassword
            | CoreError::Validation(_) => ApiError::validation(detail),
        }
    }
}

/// Converts authentication errors to API errors.
impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidToken(reason) => {
                tracing::debug!(%reason, "Rejected token");
                ApiError::unauthorized("Could not validate credentials")
            }
            AuthError::MissingToken
            | AuthError::ExpiredToken
            | AuthError::WrongTokenType
            | AuthError::InvalidCredentials => ApiError::unauthorized(err.to_string()),
            AuthError::TokenCreation(_) | AuthError::Hashing(_) => {
                tracing::error!("Authentication failure: {}", err);
                ApiError::internal("Internal server error")
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}

impl From<FormRejection> for ApiError {
    fn from(rejection: FormRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::validation(rejection.body_text())
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
