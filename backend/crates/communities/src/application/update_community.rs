//! Update Community Use Cases
//!
//! Privacy and descriptive info are changed separately; both are owner only.

use std::sync::Arc;

use kernel::acl::UsersFacade;
use kernel::id::{CommunityId, UserId};
use kernel::privacy::Privacy;

use crate::application::communities_facade::CommunitiesFacadeImpl;
use crate::application::ownership::ensure_owner;
use crate::domain::entities::Community;
use crate::domain::repository::CommunityRepository;
use crate::domain::value_objects::{AssetUrl, CommunityName, Description};
use crate::error::{CommunityError, CommunityResult};

pub struct UpdatePrivacyInput {
    pub community_id: CommunityId,
    pub requested_by: UserId,
    pub privacy: Privacy,
}

pub struct UpdatePrivacyUseCase<R, U>
where
    R: CommunityRepository,
    U: UsersFacade,
{
    community_repo: Arc<R>,
    communities: CommunitiesFacadeImpl<R>,
    users: Arc<U>,
}

impl<R, U> UpdatePrivacyUseCase<R, U>
where
    R: CommunityRepository + Send + Sync,
    U: UsersFacade,
{
    pub fn new(community_repo: Arc<R>, users: Arc<U>) -> Self {
        Self {
            communities: CommunitiesFacadeImpl::new(community_repo.clone()),
            community_repo,
            users,
        }
    }

    pub async fn execute(&self, input: UpdatePrivacyInput) -> CommunityResult<Community> {
        self.update(input).await.inspect_err(CommunityError::log)
    }

    async fn update(&self, input: UpdatePrivacyInput) -> CommunityResult<Community> {
        let mut community = self
            .community_repo
            .find_by_id(&input.community_id)
            .await?
            .ok_or(CommunityError::CommunityNotFound)?;

        ensure_owner(
            &self.communities,
            self.users.as_ref(),
            &input.community_id,
            &input.requested_by,
            "community.update_privacy",
        )
        .await?;

        if community.privacy == input.privacy {
            return Ok(community);
        }

        community.set_privacy(input.privacy);
        self.community_repo.update(&community).await?;

        tracing::info!(
            community_id = %community.community_id,
            privacy = %community.privacy,
            "Community privacy changed"
        );
        Ok(community)
    }
}

pub struct UpdateInfoInput {
    pub community_id: CommunityId,
    pub requested_by: UserId,
    pub name: String,
    pub description: String,
    pub icon_url: Option<String>,
    pub banner_url: Option<String>,
}

pub struct UpdateInfoUseCase<R, U>
where
    R: CommunityRepository,
    U: UsersFacade,
{
    community_repo: Arc<R>,
    communities: CommunitiesFacadeImpl<R>,
    users: Arc<U>,
}

impl<R, U> UpdateInfoUseCase<R, U>
where
    R: CommunityRepository + Send + Sync,
    U: UsersFacade,
{
    pub fn new(community_repo: Arc<R>, users: Arc<U>) -> Self {
        Self {
            communities: CommunitiesFacadeImpl::new(community_repo.clone()),
            community_repo,
            users,
        }
    }

    pub async fn execute(&self, input: UpdateInfoInput) -> CommunityResult<Community> {
        self.update(input).await.inspect_err(CommunityError::log)
    }

    async fn update(&self, input: UpdateInfoInput) -> CommunityResult<Community> {
        let name = CommunityName::new(&input.name).map_err(CommunityError::Validation)?;
        let description =
            Description::new(&input.description).map_err(CommunityError::Validation)?;
        let icon_url =
            AssetUrl::parse_optional(input.icon_url.as_deref()).map_err(CommunityError::Validation)?;
        let banner_url = AssetUrl::parse_optional(input.banner_url.as_deref())
            .map_err(CommunityError::Validation)?;

        let mut community = self
            .community_repo
            .find_by_id(&input.community_id)
            .await?
            .ok_or(CommunityError::CommunityNotFound)?;

        ensure_owner(
            &self.communities,
            self.users.as_ref(),
            &input.community_id,
            &input.requested_by,
            "community.update_info",
        )
        .await?;

        community.update_info(name, description, icon_url, banner_url);
        self.community_repo.update(&community).await?;

        tracing::info!(community_id = %community.community_id, "Community info updated");
        Ok(community)
    }
}
