//! Feed Error Types

use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

pub type FeedResult<T> = Result<T, FeedError>;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("Upstream facade error: {0}")]
    Facade(#[from] AppError),
}

impl FeedError {
    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            FeedError::Facade(_) => ErrorKind::InternalServerError,
        }
    }

    pub fn log(&self) {
        match self {
            FeedError::Facade(e) => {
                tracing::error!(error = %e, "Feed facade call failed");
            }
        }
    }
}

impl From<FeedError> for AppError {
    fn from(err: FeedError) -> Self {
        AppError::new(err.kind(), err.to_string())
    }
}
