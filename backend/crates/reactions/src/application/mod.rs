//! Application Layer

pub mod add_reaction;
pub mod queries;
pub mod reactions_facade;
pub mod remove_reaction;

pub use add_reaction::{AddReactionInput, AddReactionOutput, AddReactionUseCase};
pub use queries::{ReactionCounts, ReactionQueries};
pub use remove_reaction::{RemoveReactionInput, RemoveReactionUseCase};
