//! Repository Traits

use kernel::id::{CommunityId, PostId};
use kernel::page::Page;

use crate::domain::entities::Post;
use crate::error::PostResult;

#[trait_variant::make(PostRepository: Send)]
pub trait LocalPostRepository {
    async fn create(&self, post: &Post) -> PostResult<()>;

    async fn find_by_id(&self, post_id: &PostId) -> PostResult<Option<Post>>;

    async fn exists_by_id(&self, post_id: &PostId) -> PostResult<bool>;

    /// Newest first
    async fn list_by_community(&self, community_id: &CommunityId, page: Page)
    -> PostResult<Vec<Post>>;

    /// Newest first across all given communities
    async fn list_by_communities(
        &self,
        community_ids: &[CommunityId],
        page: Page,
    ) -> PostResult<Vec<Post>>;

    /// Returns whether a row was removed
    async fn delete(&self, post_id: &PostId) -> PostResult<bool>;

    async fn delete_by_community(&self, community_id: &CommunityId) -> PostResult<Vec<PostId>>;
}
