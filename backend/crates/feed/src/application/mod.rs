//! Application Layer

pub mod get_user_feed;

pub use get_user_feed::{GetUserFeedInput, GetUserFeedUseCase, UserFeed};
