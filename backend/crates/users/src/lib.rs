//! Users Context
//!
//! Local projection of platform users, fed by registration and profile
//! events. Other contexts reach it only through [`UsersFacadeImpl`].
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, value objects, repository trait
//! - `application/` - Event handlers, queries, facade implementation
//! - `infra/` - In-memory and PostgreSQL repositories

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::users_facade::UsersFacadeImpl;
pub use error::{UsersError, UsersResult};
pub use infra::memory::InMemoryUserRepository;
pub use infra::postgres::PgUserRepository;

#[cfg(test)]
mod tests;
