//! Post Error Types

use kernel::authz::PolicyRule;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::policy::PostRule;

pub type PostResult<T> = Result<T, PostError>;

#[derive(Debug, Error)]
pub enum PostError {
    #[error("Community not found")]
    CommunityNotFound,

    #[error("Author not found")]
    AuthorNotFound,

    #[error("Post not found")]
    PostNotFound,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{}", .0.message())]
    Forbidden(PostRule),

    /// Another context's facade failed
    #[error("Upstream facade error: {0}")]
    Facade(#[from] AppError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl PostError {
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            PostError::CommunityNotFound | PostError::AuthorNotFound | PostError::PostNotFound => {
                ErrorKind::NotFound
            }
            PostError::Validation(_) => ErrorKind::BadRequest,
            PostError::Forbidden(_) => ErrorKind::Forbidden,
            PostError::Facade(_) | PostError::Database(_) | PostError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            PostError::Facade(e) => {
                tracing::error!(error = %e, "Post facade call failed");
            }
            PostError::Database(e) => {
                tracing::error!(error = %e, "Post database error");
            }
            PostError::Internal(msg) => {
                tracing::error!(message = %msg, "Post internal error");
            }
            PostError::Forbidden(rule) => {
                tracing::warn!(rule = rule.code(), "Post operation denied");
            }
            _ => {
                tracing::debug!(error = %self, "Post error");
            }
        }
    }
}

impl From<PostError> for AppError {
    fn from(err: PostError) -> Self {
        err.to_app_error()
    }
}
