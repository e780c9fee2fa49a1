//! Application Layer

pub mod communities_facade;
pub mod config;
pub mod create_community;
pub mod delete_community;
pub mod ownership;
pub mod queries;
pub mod reconcile_owners;
pub mod update_community;

pub use create_community::{CreateCommunityInput, CreateCommunityUseCase};
pub use delete_community::{DeleteCommunityInput, DeleteCommunityUseCase};
pub use queries::CommunityQueries;
pub use reconcile_owners::{ReconcileOwnersUseCase, ReconcileReport};
pub use update_community::{
    UpdateInfoInput, UpdateInfoUseCase, UpdatePrivacyInput, UpdatePrivacyUseCase,
};
