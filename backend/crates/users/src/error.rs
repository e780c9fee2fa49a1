//! Users Error Types

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type UsersResult<T> = Result<T, UsersError>;

#[derive(Debug, Error)]
pub enum UsersError {
    #[error("User not found")]
    UserNotFound,

    /// Profile id already bound to a different user
    #[error("Profile is already linked to another user")]
    ProfileAlreadyBound,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl UsersError {
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            UsersError::UserNotFound => ErrorKind::NotFound,
            UsersError::ProfileAlreadyBound => ErrorKind::Conflict,
            UsersError::Validation(_) => ErrorKind::BadRequest,
            UsersError::Database(_) | UsersError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            UsersError::Database(e) => {
                tracing::error!(error = %e, "Users database error");
            }
            UsersError::Internal(msg) => {
                tracing::error!(message = %msg, "Users internal error");
            }
            UsersError::ProfileAlreadyBound => {
                tracing::warn!("Profile id reused by a different user");
            }
            _ => {
                tracing::debug!(error = %self, "Users error");
            }
        }
    }
}

impl From<AppError> for UsersError {
    fn from(err: AppError) -> Self {
        UsersError::Internal(err.to_string())
    }
}

impl From<UsersError> for AppError {
    fn from(err: UsersError) -> Self {
        err.to_app_error()
    }
}
