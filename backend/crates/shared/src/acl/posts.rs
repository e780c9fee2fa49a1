//! Facades exposed by the posts context

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::app_error::AppResult;
use crate::id::{CommunityId, PostId, UserId};
use crate::page::Page;

/// Read model of a post handed to other contexts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostSummary {
    pub post_id: PostId,
    pub community_id: CommunityId,
    pub author_id: UserId,
    /// `message` or `announcement`
    pub kind: String,
    pub content: String,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
}

#[trait_variant::make(PostsFacade: Send)]
pub trait LocalPostsFacade {
    async fn exists(&self, post_id: &PostId) -> AppResult<bool>;

    /// Posts of the given communities, newest first
    async fn posts_for_communities(
        &self,
        community_ids: &[CommunityId],
        page: Page,
    ) -> AppResult<Vec<PostSummary>>;
}

#[trait_variant::make(PostLifecycle: Send)]
pub trait LocalPostLifecycle {
    /// Delete every post of a community and return the removed ids
    async fn delete_all_for_community(&self, community_id: &CommunityId)
    -> AppResult<Vec<PostId>>;
}
