//! Application Layer

pub mod delete_post;
pub mod posts_facade;
pub mod publish_post;
pub mod queries;
mod role_resolution;

pub use delete_post::{DeletePostInput, DeletePostUseCase};
pub use publish_post::{PublishPostInput, PublishPostOutput, PublishPostUseCase};
pub use queries::PostQueries;
