//! Community Error Types

use kernel::authz::PolicyRule;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::policy::CommunityRule;

pub type CommunityResult<T> = Result<T, CommunityError>;

#[derive(Debug, Error)]
pub enum CommunityError {
    #[error("Community not found")]
    CommunityNotFound,

    #[error("Owner not found")]
    OwnerNotFound,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{}", .0.message())]
    Forbidden(CommunityRule),

    /// Another context's facade failed
    #[error("Upstream facade error: {0}")]
    Facade(#[from] AppError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CommunityError {
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CommunityError::CommunityNotFound | CommunityError::OwnerNotFound => {
                ErrorKind::NotFound
            }
            CommunityError::Validation(_) => ErrorKind::BadRequest,
            CommunityError::Forbidden(_) => ErrorKind::Forbidden,
            CommunityError::Facade(_)
            | CommunityError::Database(_)
            | CommunityError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            CommunityError::Facade(e) => {
                tracing::error!(error = %e, "Community facade call failed");
            }
            CommunityError::Database(e) => {
                tracing::error!(error = %e, "Community database error");
            }
            CommunityError::Internal(msg) => {
                tracing::error!(message = %msg, "Community internal error");
            }
            CommunityError::Forbidden(rule) => {
                tracing::warn!(rule = rule.code(), "Community management denied");
            }
            _ => {
                tracing::debug!(error = %self, "Community error");
            }
        }
    }
}

impl From<CommunityError> for AppError {
    fn from(err: CommunityError) -> Self {
        err.to_app_error()
    }
}
