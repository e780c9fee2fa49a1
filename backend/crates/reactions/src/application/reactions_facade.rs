//! Reactions facade implementation

use std::sync::Arc;

use kernel::acl::ReactionsFacade;
use kernel::error::app_error::AppResult;
use kernel::id::PostId;

use crate::domain::repository::ReactionRepository;

pub struct ReactionsFacadeImpl<R>
where
    R: ReactionRepository,
{
    reaction_repo: Arc<R>,
}

impl<R> ReactionsFacadeImpl<R>
where
    R: ReactionRepository + Send + Sync,
{
    pub fn new(reaction_repo: Arc<R>) -> Self {
        Self { reaction_repo }
    }
}

impl<R> ReactionsFacade for ReactionsFacadeImpl<R>
where
    R: ReactionRepository + Send + Sync,
{
    async fn remove_all_for_posts(&self, post_ids: &[PostId]) -> AppResult<u64> {
        if post_ids.is_empty() {
            return Ok(0);
        }
        let removed = self.reaction_repo.delete_by_posts(post_ids).await?;
        tracing::debug!(posts = post_ids.len(), removed, "Reactions cleared");
        Ok(removed)
    }
}
