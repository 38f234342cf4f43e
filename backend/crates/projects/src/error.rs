//! Project Error Types

use auth::AuthError;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Project-specific result type alias
pub type ProjectResult<T> = Result<T, ProjectError>;

/// Project-specific error variants
#[derive(Debug, Error)]
pub enum ProjectError {
    /// Project missing or soft-deleted
    #[error("Project not found")]
    ProjectNotFound,

    /// Caller is neither the owner nor an admin
    #[error("Not enough permissions")]
    Forbidden,

    /// Target owner missing or soft-deleted
    #[error("Owner user not found")]
    OwnerNotFound,

    /// Only admins may set or change a project's owner
    #[error("Only admins can set the project owner")]
    OwnerAssignmentForbidden,

    /// Malformed input shape (project name bounds)
    #[error("{0}")]
    Validation(String),

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProjectError {
    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            ProjectError::ProjectNotFound | ProjectError::OwnerNotFound => ErrorKind::NotFound,
            ProjectError::Forbidden | ProjectError::OwnerAssignmentForbidden => {
                ErrorKind::Forbidden
            }
            ProjectError::Validation(_) => ErrorKind::BadRequest,
            ProjectError::Database(_) | ProjectError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            ProjectError::Database(e) => {
                tracing::error!(error = %e, "Project database error");
            }
            ProjectError::Internal(msg) => {
                tracing::error!(message = %msg, "Project internal error");
            }
            ProjectError::Forbidden | ProjectError::OwnerAssignmentForbidden => {
                tracing::warn!(error = %self, "Cross-tenant project access rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Project error");
            }
        }
    }
}

impl IntoResponse for ProjectError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<AppError> for ProjectError {
    fn from(err: AppError) -> Self {
        if err.kind() == ErrorKind::BadRequest {
            ProjectError::Validation(err.message().to_string())
        } else {
            ProjectError::Internal(err.to_string())
        }
    }
}

/// Owner lookups go through the auth crate's user repository
impl From<AuthError> for ProjectError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::Database(e) => ProjectError::Database(e),
            other => ProjectError::Internal(other.to_string()),
        }
    }
}
