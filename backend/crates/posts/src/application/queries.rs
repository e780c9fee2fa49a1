//! Read-side queries

use std::sync::Arc;

use kernel::id::{CommunityId, PostId};
use kernel::page::Page;

use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

pub struct PostQueries<R>
where
    R: PostRepository,
{
    post_repo: Arc<R>,
}

impl<R> PostQueries<R>
where
    R: PostRepository,
{
    pub fn new(post_repo: Arc<R>) -> Self {
        Self { post_repo }
    }

    pub async fn by_id(&self, post_id: &PostId) -> PostResult<Post> {
        self.post_repo
            .find_by_id(post_id)
            .await?
            .ok_or(PostError::PostNotFound)
    }

    /// Newest first
    pub async fn in_community(&self, community_id: &CommunityId, page: Page) -> PostResult<Vec<Post>> {
        self.post_repo.list_by_community(community_id, page).await
    }
}
