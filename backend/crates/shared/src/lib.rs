//! Shared Kernel - vocabulary crossing bounded contexts
//!
//! This crate contains the "smallest core" every context agrees on:
//! - Common error types and result aliases
//! - Typed identifiers (UUID and object-id families)
//! - Community roles and privacy
//! - Authorization decisions and compensation outcomes
//! - Anti-corruption-layer facades between contexts
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all contexts.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod acl;
pub mod authz;
pub mod id;
pub mod outcome;
pub mod page;
pub mod privacy;
pub mod role;
