//! Application Layer
//!
//! Event handlers and queries for the users context.

pub mod queries;
pub mod register_user;
pub mod update_banner;
pub mod update_profile;
pub mod users_facade;

pub use queries::UserQueries;
pub use register_user::{RegisterUserInput, RegisterUserOutput, RegisterUserUseCase};
pub use update_banner::{UpdateBannerInput, UpdateBannerUseCase};
pub use update_profile::{UpdateProfileInput, UpdateProfileUseCase};
