//! Posts Context
//!
//! Publishing and deleting posts inside communities. Who may publish what is
//! decided from the author's subscription role, falling back to community
//! ownership (under either identity) when there is no privileged role.
//!
//! Clean Architecture structure:
//! - `domain/` - Post entity, value objects, publish/delete policy
//! - `application/` - Use cases, role resolution, queries, facade implementation
//! - `infra/` - In-memory and PostgreSQL repositories

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::posts_facade::PostsFacadeImpl;
pub use domain::value_objects::PostKind;
pub use error::{PostError, PostResult};
pub use infra::memory::InMemoryPostRepository;
pub use infra::postgres::PgPostRepository;

#[cfg(test)]
mod tests;
