//! In-memory repository

use std::collections::HashMap;

use kernel::id::{CommunityId, PostId};
use kernel::page::Page;
use tokio::sync::RwLock;

use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: RwLock<HashMap<PostId, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first<'a>(posts: impl Iterator<Item = &'a Post>) -> Vec<Post> {
    let mut posts: Vec<Post> = posts.cloned().collect();
    posts.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| b.post_id.cmp(&a.post_id))
    });
    posts
}

impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: &Post) -> PostResult<()> {
        let mut posts = self.posts.write().await;
        if posts.contains_key(&post.post_id) {
            return Err(PostError::Internal(format!("duplicate post id {}", post.post_id)));
        }
        posts.insert(post.post_id, post.clone());
        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> PostResult<Option<Post>> {
        Ok(self.posts.read().await.get(post_id).cloned())
    }

    async fn exists_by_id(&self, post_id: &PostId) -> PostResult<bool> {
        Ok(self.posts.read().await.contains_key(post_id))
    }

    async fn list_by_community(
        &self,
        community_id: &CommunityId,
        page: Page,
    ) -> PostResult<Vec<Post>> {
        let posts = self.posts.read().await;
        let matching = newest_first(posts.values().filter(|p| &p.community_id == community_id));
        Ok(page.slice(matching))
    }

    async fn list_by_communities(
        &self,
        community_ids: &[CommunityId],
        page: Page,
    ) -> PostResult<Vec<Post>> {
        let posts = self.posts.read().await;
        let matching =
            newest_first(posts.values().filter(|p| community_ids.contains(&p.community_id)));
        Ok(page.slice(matching))
    }

    async fn delete(&self, post_id: &PostId) -> PostResult<bool> {
        Ok(self.posts.write().await.remove(post_id).is_some())
    }

    async fn delete_by_community(&self, community_id: &CommunityId) -> PostResult<Vec<PostId>> {
        let mut posts = self.posts.write().await;
        let removed: Vec<PostId> = posts
            .values()
            .filter(|p| &p.community_id == community_id)
            .map(|p| p.post_id)
            .collect();
        for post_id in &removed {
            posts.remove(post_id);
        }
        Ok(removed)
    }
}
