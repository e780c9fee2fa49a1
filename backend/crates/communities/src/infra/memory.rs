//! In-memory repository

use std::collections::HashMap;

use kernel::id::CommunityId;
use kernel::page::Page;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::Community;
use crate::domain::repository::CommunityRepository;
use crate::error::{CommunityError, CommunityResult};

#[derive(Default)]
pub struct InMemoryCommunityRepository {
    communities: RwLock<HashMap<CommunityId, Community>>,
}

impl InMemoryCommunityRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CommunityRepository for InMemoryCommunityRepository {
    async fn create(&self, community: &Community) -> CommunityResult<()> {
        let mut communities = self.communities.write().await;
        if communities.contains_key(&community.community_id) {
            return Err(CommunityError::Internal(format!(
                "duplicate community id {}",
                community.community_id
            )));
        }
        communities.insert(community.community_id, community.clone());
        Ok(())
    }

    async fn find_by_id(&self, community_id: &CommunityId) -> CommunityResult<Option<Community>> {
        Ok(self.communities.read().await.get(community_id).cloned())
    }

    async fn exists_by_id(&self, community_id: &CommunityId) -> CommunityResult<bool> {
        Ok(self.communities.read().await.contains_key(community_id))
    }

    async fn list_by_owner(&self, owner: &Uuid, page: Page) -> CommunityResult<Vec<Community>> {
        let communities = self.communities.read().await;
        let mut owned: Vec<&Community> = communities
            .values()
            .filter(|c| c.owner.as_uuid() == owner)
            .collect();
        owned.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(page.slice(owned.into_iter().cloned()))
    }

    async fn list(&self, page: Page) -> CommunityResult<Vec<Community>> {
        let communities = self.communities.read().await;
        let mut all: Vec<&Community> = communities.values().collect();
        all.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.community_id.as_uuid().cmp(b.community_id.as_uuid()))
        });
        Ok(page.slice(all.into_iter().cloned()))
    }

    async fn update(&self, community: &Community) -> CommunityResult<()> {
        let mut communities = self.communities.write().await;
        match communities.get_mut(&community.community_id) {
            Some(stored) => {
                *stored = community.clone();
                Ok(())
            }
            None => Err(CommunityError::CommunityNotFound),
        }
    }

    async fn delete(&self, community_id: &CommunityId) -> CommunityResult<bool> {
        Ok(self.communities.write().await.remove(community_id).is_some())
    }
}
