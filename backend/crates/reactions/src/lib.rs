//! Reactions Context
//!
//! One reaction per user and post; reacting again replaces the type.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::reactions_facade::ReactionsFacadeImpl;
pub use domain::value_objects::ReactionType;
pub use error::{ReactionError, ReactionResult};
pub use infra::memory::InMemoryReactionRepository;
pub use infra::postgres::PgReactionRepository;

#[cfg(test)]
mod tests;
