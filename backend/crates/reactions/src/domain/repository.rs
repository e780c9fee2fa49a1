//! Repository Traits

use kernel::id::{PostId, ReactionId, UserId};
use kernel::page::Page;

use crate::domain::entities::Reaction;
use crate::domain::value_objects::ReactionType;
use crate::error::ReactionResult;

#[trait_variant::make(ReactionRepository: Send)]
pub trait LocalReactionRepository {
    /// Insert, or replace the type of the existing (post, user) reaction.
    /// Returns the stored row, which keeps the original id on replace.
    async fn upsert(&self, reaction: &Reaction) -> ReactionResult<Reaction>;

    async fn find_by_id(&self, reaction_id: &ReactionId) -> ReactionResult<Option<Reaction>>;

    async fn find_by_post_and_user(
        &self,
        post_id: &PostId,
        user_id: &UserId,
    ) -> ReactionResult<Option<Reaction>>;

    /// Oldest first
    async fn list_by_post(&self, post_id: &PostId, page: Page) -> ReactionResult<Vec<Reaction>>;

    /// Only types with at least one reaction appear
    async fn count_by_post(&self, post_id: &PostId) -> ReactionResult<Vec<(ReactionType, u64)>>;

    async fn delete(&self, reaction_id: &ReactionId) -> ReactionResult<bool>;

    async fn delete_by_posts(&self, post_ids: &[PostId]) -> ReactionResult<u64>;
}
