//! Reaction Error Types

use kernel::authz::PolicyRule;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::policy::ReactionRule;

pub type ReactionResult<T> = Result<T, ReactionError>;

#[derive(Debug, Error)]
pub enum ReactionError {
    #[error("Post not found")]
    PostNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Reaction not found")]
    ReactionNotFound,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{}", .0.message())]
    Forbidden(ReactionRule),

    #[error("Upstream facade error: {0}")]
    Facade(#[from] AppError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ReactionError {
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ReactionError::PostNotFound
            | ReactionError::UserNotFound
            | ReactionError::ReactionNotFound => ErrorKind::NotFound,
            ReactionError::Validation(_) => ErrorKind::BadRequest,
            ReactionError::Forbidden(_) => ErrorKind::Forbidden,
            ReactionError::Facade(_) | ReactionError::Database(_) | ReactionError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    pub fn log(&self) {
        match self {
            ReactionError::Facade(e) => {
                tracing::error!(error = %e, "Reaction facade call failed");
            }
            ReactionError::Database(e) => {
                tracing::error!(error = %e, "Reaction database error");
            }
            ReactionError::Internal(msg) => {
                tracing::error!(message = %msg, "Reaction internal error");
            }
            ReactionError::Forbidden(rule) => {
                tracing::warn!(rule = rule.code(), "Reaction removal denied");
            }
            _ => {
                tracing::debug!(error = %self, "Reaction error");
            }
        }
    }
}

impl From<ReactionError> for AppError {
    fn from(err: ReactionError) -> Self {
        err.to_app_error()
    }
}
