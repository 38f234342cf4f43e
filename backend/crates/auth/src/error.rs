//! Auth Error Types
//!
//! Auth-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::password::PasswordHashError;
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// Login failed. Identical for unknown username and wrong
    /// password.
    #[error("Incorrect username or password")]
    InvalidCredentials,

    /// Bearer token missing/invalid/expired, or the subject no longer
    /// resolves to a live user. One opaque message for every cause.
    #[error("Could not validate credentials")]
    Unauthenticated,

    /// Operation requires an admin principal
    #[error("Admin privileges required")]
    AdminRequired,

    /// The protected admin cannot lose the admin flag
    #[error("The first-created admin user cannot be downgraded")]
    ProtectedAdminDowngrade,

    /// The protected admin cannot be soft-deleted
    #[error("The first-created admin user cannot be deleted")]
    ProtectedAdminDelete,

    /// User missing or soft-deleted
    #[error("User not found")]
    UserNotFound,

    /// Username already in use (soft-deleted rows included)
    #[error("Username already in use")]
    UserNameTaken,

    /// Email already in use (soft-deleted rows included)
    #[error("Email already in use")]
    EmailTaken,

    /// Username or email already in use (creation duplicate check)
    #[error("Username or email already in use")]
    UserNameOrEmailTaken,

    /// Password shorter than the configured minimum
    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    /// Malformed input shape (username/email/password format)
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::InvalidCredentials | AuthError::Unauthenticated => ErrorKind::Unauthorized,
            AuthError::AdminRequired
            | AuthError::ProtectedAdminDowngrade
            | AuthError::ProtectedAdminDelete => ErrorKind::Forbidden,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::UserNameTaken
            | AuthError::EmailTaken
            | AuthError::UserNameOrEmailTaken => ErrorKind::Conflict,
            AuthError::PasswordTooShort { .. } | AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::Database(_) | AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            AuthError::Database(e) => {
                tracing::error!(error = %e, "Auth database error");
            }
            AuthError::Internal(msg) => {
                tracing::error!(message = %msg, "Auth internal error");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            AuthError::ProtectedAdminDowngrade | AuthError::ProtectedAdminDelete => {
                tracing::warn!("Mutation attempt on protected admin rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Auth error");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for AuthError {
    fn from(err: AppError) -> Self {
        // Value-object validation surfaces as 400; anything else is
        // an unexpected internal failure.
        if err.kind() == ErrorKind::BadRequest {
            AuthError::Validation(err.message().to_string())
        } else {
            AuthError::Internal(err.to_string())
        }
    }
}

impl From<PasswordHashError> for AuthError {
    fn from(err: PasswordHashError) -> Self {
        AuthError::Internal(err.to_string())
    }
}
