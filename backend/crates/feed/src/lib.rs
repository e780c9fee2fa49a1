//! Feed Context
//!
//! Read-only composition of the subscriptions and posts contexts: the posts
//! of every community a user belongs to, newest first.

pub mod application;
pub mod error;

pub use application::{GetUserFeedInput, GetUserFeedUseCase, UserFeed};
pub use error::{FeedError, FeedResult};
