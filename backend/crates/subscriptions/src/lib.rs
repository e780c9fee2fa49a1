//! Subscriptions Context
//!
//! Membership of users in communities and the authorization engine that
//! decides who may subscribe or unsubscribe whom.
//!
//! ## Rules
//! - Self-subscription always yields role `member`, whatever was requested
//! - Public communities: only self-subscription, never delegation
//! - Private communities: the owner (either identity) or an admin/owner
//!   subscriber may subscribe others with any role
//! - The community owner can never be unsubscribed
//! - At most one subscription per (user, community)
//!
//! Clean Architecture structure:
//! - `domain/` - Subscription entity, pure policy functions, repository trait
//! - `application/` - Subscribe/Unsubscribe, queries, facade implementation
//! - `infra/` - In-memory and PostgreSQL repositories

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::subscriptions_facade::SubscriptionsFacadeImpl;
pub use error::{SubscriptionError, SubscriptionResult};
pub use infra::memory::InMemorySubscriptionRepository;
pub use infra::postgres::PgSubscriptionRepository;
