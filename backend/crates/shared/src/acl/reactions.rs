//! Facade exposed by the reactions context

use crate::error::app_error::AppResult;
use crate::id::PostId;

#[trait_variant::make(ReactionsFacade: Send)]
pub trait LocalReactionsFacade {
    /// Remove every reaction attached to the given posts
    async fn remove_all_for_posts(&self, post_ids: &[PostId]) -> AppResult<u64>;
}
