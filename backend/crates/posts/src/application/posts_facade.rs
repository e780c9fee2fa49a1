//! Posts facade implementation

use std::sync::Arc;

use kernel::acl::{PostLifecycle, PostSummary, PostsFacade};
use kernel::error::app_error::AppResult;
use kernel::id::{CommunityId, PostId};
use kernel::page::Page;

use crate::domain::repository::PostRepository;

pub struct PostsFacadeImpl<R>
where
    R: PostRepository,
{
    post_repo: Arc<R>,
}

impl<R> PostsFacadeImpl<R>
where
    R: PostRepository + Send + Sync,
{
    pub fn new(post_repo: Arc<R>) -> Self {
        Self { post_repo }
    }
}

impl<R> PostsFacade for PostsFacadeImpl<R>
where
    R: PostRepository + Send + Sync,
{
    async fn exists(&self, post_id: &PostId) -> AppResult<bool> {
        Ok(self.post_repo.exists_by_id(post_id).await?)
    }

    async fn posts_for_communities(
        &self,
        community_ids: &[CommunityId],
        page: Page,
    ) -> AppResult<Vec<PostSummary>> {
        if community_ids.is_empty() {
            return Ok(Vec::new());
        }
        let posts = self
            .post_repo
            .list_by_communities(community_ids, page)
            .await?;
        Ok(posts.iter().map(|post| post.to_summary()).collect())
    }
}

impl<R> PostLifecycle for PostsFacadeImpl<R>
where
    R: PostRepository + Send + Sync,
{
    async fn delete_all_for_community(
        &self,
        community_id: &CommunityId,
    ) -> AppResult<Vec<PostId>> {
        let removed = self.post_repo.delete_by_community(community_id).await?;
        tracing::info!(
            community_id = %community_id,
            removed = removed.len(),
            "Community posts removed"
        );
        Ok(removed)
    }
}
