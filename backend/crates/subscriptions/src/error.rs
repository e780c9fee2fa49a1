//! Subscription Error Types

use kernel::authz::PolicyRule;
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::policy::SubscriptionRule;

pub type SubscriptionResult<T> = Result<T, SubscriptionError>;

#[derive(Debug, Error)]
pub enum SubscriptionError {
    #[error("Community not found")]
    CommunityNotFound,

    #[error("User not found")]
    UserNotFound,

    #[error("Requester not found")]
    RequesterNotFound,

    #[error("Subscription not found")]
    SubscriptionNotFound,

    #[error("Invalid role: {0}")]
    InvalidRole(String),

    #[error("{}", .0.message())]
    Forbidden(SubscriptionRule),

    #[error("already subscribed")]
    AlreadySubscribed,

    /// Another context's facade failed
    #[error("Upstream facade error: {0}")]
    Facade(#[from] AppError),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SubscriptionError {
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SubscriptionError::CommunityNotFound
            | SubscriptionError::UserNotFound
            | SubscriptionError::RequesterNotFound
            | SubscriptionError::SubscriptionNotFound => ErrorKind::NotFound,
            SubscriptionError::InvalidRole(_) => ErrorKind::BadRequest,
            SubscriptionError::Forbidden(_) => ErrorKind::Forbidden,
            SubscriptionError::AlreadySubscribed => ErrorKind::Conflict,
            SubscriptionError::Facade(_)
            | SubscriptionError::Database(_)
            | SubscriptionError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    pub fn log(&self) {
        match self {
            SubscriptionError::Facade(e) => {
                tracing::error!(error = %e, "Subscription facade call failed");
            }
            SubscriptionError::Database(e) => {
                tracing::error!(error = %e, "Subscription database error");
            }
            SubscriptionError::Internal(msg) => {
                tracing::error!(message = %msg, "Subscription internal error");
            }
            SubscriptionError::Forbidden(rule) => {
                tracing::warn!(rule = rule.code(), "Subscription change denied");
            }
            SubscriptionError::AlreadySubscribed => {
                tracing::warn!("Duplicate subscription rejected");
            }
            _ => {
                tracing::debug!(error = %self, "Subscription error");
            }
        }
    }
}

/// Unique violations on (user_id, community_id) surface as a conflict
impl From<sqlx::Error> for SubscriptionError {
    fn from(err: sqlx::Error) -> Self {
        let unique_violation = err
            .as_database_error()
            .is_some_and(|db| db.is_unique_violation());
        if unique_violation {
            SubscriptionError::AlreadySubscribed
        } else {
            SubscriptionError::Database(err)
        }
    }
}

impl From<SubscriptionError> for AppError {
    fn from(err: SubscriptionError) -> Self {
        err.to_app_error()
    }
}
