//! Community queries

use std::sync::Arc;

use kernel::acl::IdentityRef;
use kernel::id::CommunityId;
use kernel::page::Page;

use crate::domain::entities::Community;
use crate::domain::repository::CommunityRepository;
use crate::error::{CommunityError, CommunityResult};

pub struct CommunityQueries<R>
where
    R: CommunityRepository,
{
    community_repo: Arc<R>,
}

impl<R> CommunityQueries<R>
where
    R: CommunityRepository,
{
    pub fn new(community_repo: Arc<R>) -> Self {
        Self { community_repo }
    }

    pub async fn by_id(&self, community_id: &CommunityId) -> CommunityResult<Community> {
        self.community_repo
            .find_by_id(community_id)
            .await?
            .ok_or(CommunityError::CommunityNotFound)
    }

    pub async fn by_owner(&self, owner: &IdentityRef, page: Page) -> CommunityResult<Vec<Community>> {
        self.community_repo.list_by_owner(owner.as_uuid(), page).await
    }

    pub async fn list(&self, page: Page) -> CommunityResult<Vec<Community>> {
        self.community_repo.list(page).await
    }
}
