//! Create Community Use Case
//!
//! Persists the community, then subscribes the owner with role `owner`.
//! The owner subscription lives in another context and is not transactional
//! with the insert: a failure there is reported as pending compensation.

use std::sync::Arc;

use kernel::acl::{IdentityRef, SubscriptionLifecycle, UsersFacade};
use kernel::id::{CommunityId, UserId};
use kernel::outcome::Committed;
use kernel::privacy::Privacy;

use crate::application::config::{CommunitiesConfig, OwnerIdentity};
use crate::domain::entities::Community;
use crate::domain::repository::CommunityRepository;
use crate::domain::value_objects::{AssetUrl, CommunityName, Description};
use crate::error::{CommunityError, CommunityResult};

pub struct CreateCommunityInput {
    pub owner_id: UserId,
    pub name: String,
    pub description: String,
    pub icon_url: Option<String>,
    pub banner_url: Option<String>,
    pub privacy: Privacy,
}

pub struct CreateCommunityUseCase<R, U, S>
where
    R: CommunityRepository,
    U: UsersFacade,
    S: SubscriptionLifecycle,
{
    community_repo: Arc<R>,
    users: Arc<U>,
    subscriptions: Arc<S>,
    config: Arc<CommunitiesConfig>,
}

impl<R, U, S> CreateCommunityUseCase<R, U, S>
where
    R: CommunityRepository,
    U: UsersFacade,
    S: SubscriptionLifecycle,
{
    pub fn new(
        community_repo: Arc<R>,
        users: Arc<U>,
        subscriptions: Arc<S>,
        config: Arc<CommunitiesConfig>,
    ) -> Self {
        Self {
            community_repo,
            users,
            subscriptions,
            config,
        }
    }

    pub async fn execute(
        &self,
        input: CreateCommunityInput,
    ) -> CommunityResult<Committed<CommunityId>> {
        self.create(input).await.inspect_err(CommunityError::log)
    }

    async fn create(&self, input: CreateCommunityInput) -> CommunityResult<Committed<CommunityId>> {
        let name = CommunityName::new(&input.name).map_err(CommunityError::Validation)?;
        let description =
            Description::new(&input.description).map_err(CommunityError::Validation)?;
        let icon_url =
            AssetUrl::parse_optional(input.icon_url.as_deref()).map_err(CommunityError::Validation)?;
        let banner_url = AssetUrl::parse_optional(input.banner_url.as_deref())
            .map_err(CommunityError::Validation)?;

        if !self.users.exists(&input.owner_id).await? {
            return Err(CommunityError::OwnerNotFound);
        }

        let owner = match self.config.owner_identity {
            OwnerIdentity::User => IdentityRef::User(input.owner_id),
            OwnerIdentity::Profile => self
                .users
                .profile_id_of(&input.owner_id)
                .await?
                .map(IdentityRef::Profile)
                .ok_or(CommunityError::OwnerNotFound)?,
        };

        let community = Community::new(
            owner,
            name,
            description,
            icon_url,
            banner_url,
            input.privacy,
        );
        self.community_repo.create(&community).await?;

        tracing::info!(
            community_id = %community.community_id,
            owner = %community.owner,
            privacy = %community.privacy,
            "Community created"
        );

        let mut outcome = Committed::new(community.community_id);
        let owner_subscription = self
            .subscriptions
            .create_owner_subscription(&input.owner_id, &community.community_id)
            .await;
        outcome.compensate(
            "subscriptions.create_owner_subscription",
            community.community_id,
            owner_subscription,
        );

        Ok(outcome)
    }
}
