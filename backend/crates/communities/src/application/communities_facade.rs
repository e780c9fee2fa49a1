//! Communities facade implementation

use std::sync::Arc;

use kernel::acl::{CommunitiesFacade, IdentityRef};
use kernel::error::app_error::{AppError, AppResult};
use kernel::id::CommunityId;
use kernel::privacy::Privacy;

use crate::domain::entities::Community;
use crate::domain::repository::CommunityRepository;

pub struct CommunitiesFacadeImpl<R>
where
    R: CommunityRepository,
{
    community_repo: Arc<R>,
}

impl<R> CommunitiesFacadeImpl<R>
where
    R: CommunityRepository + Send + Sync,
{
    pub fn new(community_repo: Arc<R>) -> Self {
        Self { community_repo }
    }

    async fn load(&self, community_id: &CommunityId) -> AppResult<Community> {
        self.community_repo
            .find_by_id(community_id)
            .await?
            .ok_or_else(|| AppError::not_found("Community not found"))
    }
}

impl<R> CommunitiesFacade for CommunitiesFacadeImpl<R>
where
    R: CommunityRepository + Send + Sync,
{
    async fn exists(&self, community_id: &CommunityId) -> AppResult<bool> {
        Ok(self.community_repo.exists_by_id(community_id).await?)
    }

    async fn privacy(&self, community_id: &CommunityId) -> AppResult<Privacy> {
        Ok(self.load(community_id).await?.privacy)
    }

    async fn owner_id(&self, community_id: &CommunityId) -> AppResult<IdentityRef> {
        Ok(self.load(community_id).await?.owner)
    }

    async fn is_owner(
        &self,
        community_id: &CommunityId,
        candidate: IdentityRef,
    ) -> AppResult<bool> {
        let community = self.community_repo.find_by_id(community_id).await?;
        Ok(community.is_some_and(|c| c.is_owned_by(&candidate)))
    }
}
