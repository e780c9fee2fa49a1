//! Communities Context
//!
//! Owns communities: who owns them, whether they are private, and their
//! descriptive info. Creating or deleting a community triggers best-effort
//! follow-up writes in the subscriptions, posts and reactions contexts; those
//! are reported back through [`kernel::outcome::Committed`].
//!
//! Clean Architecture structure:
//! - `domain/` - Community entity, value objects, management policy
//! - `application/` - Use cases, queries, facade implementation
//! - `infra/` - In-memory and PostgreSQL repositories

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::communities_facade::CommunitiesFacadeImpl;
pub use application::config::{CommunitiesConfig, OwnerIdentity};
pub use error::{CommunityError, CommunityResult};
pub use infra::memory::InMemoryCommunityRepository;
pub use infra::postgres::PgCommunityRepository;

// Convenience re-exports
pub mod config {
    pub use crate::application::config::*;
}

#[cfg(test)]
mod tests;
