//! Subscribe Use Case
//!
//! A user subscribes themselves, or a privileged requester subscribes
//! someone else to a private community.
//!
//! Order of checks:
//! 1. community, target user and requester exist
//! 2. requested role name is valid (defaults to `member`)
//! 3. privacy policy, with the requester's privilege for delegated requests
//! 4. no existing subscription for the pair

use std::sync::Arc;

use kernel::acl::{CommunitiesFacade, UsersFacade};
use kernel::id::{CommunityId, SubscriptionId, UserId};
use kernel::role::CommunityRole;
use serde::Serialize;

use crate::application::privilege::requester_privilege;
use crate::domain::entities::Subscription;
use crate::domain::policy;
use crate::domain::repository::SubscriptionRepository;
use crate::error::{SubscriptionError, SubscriptionResult};

pub struct SubscribeInput {
    pub user_id: UserId,
    pub community_id: CommunityId,
    pub requested_by: UserId,
    /// Role name as given by the caller; `None` means `member`
    pub requested_role: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SubscribeOutput {
    pub subscription_id: SubscriptionId,
    pub role: CommunityRole,
}

pub struct SubscribeUseCase<R, C, U>
where
    R: SubscriptionRepository,
    C: CommunitiesFacade,
    U: UsersFacade,
{
    subscription_repo: Arc<R>,
    communities: Arc<C>,
    users: Arc<U>,
}

impl<R, C, U> SubscribeUseCase<R, C, U>
where
    R: SubscriptionRepository,
    C: CommunitiesFacade,
    U: UsersFacade,
{
    pub fn new(subscription_repo: Arc<R>, communities: Arc<C>, users: Arc<U>) -> Self {
        Self {
            subscription_repo,
            communities,
            users,
        }
    }

    pub async fn execute(&self, input: SubscribeInput) -> SubscriptionResult<SubscribeOutput> {
        self.subscribe(input)
            .await
            .inspect_err(SubscriptionError::log)
    }

    async fn subscribe(&self, input: SubscribeInput) -> SubscriptionResult<SubscribeOutput> {
        let SubscribeInput {
            user_id,
            community_id,
            requested_by,
            requested_role,
        } = input;

        if !self.communities.exists(&community_id).await? {
            return Err(SubscriptionError::CommunityNotFound);
        }
        if !self.users.exists(&user_id).await? {
            return Err(SubscriptionError::UserNotFound);
        }
        if requested_by != user_id && !self.users.exists(&requested_by).await? {
            return Err(SubscriptionError::RequesterNotFound);
        }

        let requested = match requested_role.as_deref() {
            None => CommunityRole::Member,
            Some(name) => {
                if !self.users.role_name_valid(name).await? {
                    return Err(SubscriptionError::InvalidRole(name.to_string()));
                }
                CommunityRole::parse(name)
                    .map_err(|_| SubscriptionError::InvalidRole(name.to_string()))?
            }
        };

        let is_self = requested_by == user_id;
        let privacy = self.communities.privacy(&community_id).await?;
        let granted = policy::resolve_granted_role(is_self, requested);

        let requester = if policy::requires_requester_privilege(is_self, privacy) {
            Some(
                requester_privilege(
                    self.subscription_repo.as_ref(),
                    self.communities.as_ref(),
                    self.users.as_ref(),
                    &requested_by,
                    &community_id,
                )
                .await?,
            )
        } else {
            None
        };

        policy::evaluate_subscribe(is_self, privacy, requester)
            .record("subscription.subscribe", requested_by, community_id)
            .into_result(SubscriptionError::Forbidden)?;

        if self
            .subscription_repo
            .exists_by_user_and_community(&user_id, &community_id)
            .await?
        {
            return Err(SubscriptionError::AlreadySubscribed);
        }

        let subscription = Subscription::new(user_id, community_id, granted);
        self.subscription_repo.create(&subscription).await?;

        tracing::info!(
            subscription_id = %subscription.subscription_id,
            user_id = %user_id,
            community_id = %community_id,
            requested_by = %requested_by,
            role = %granted,
            "Subscription created"
        );

        Ok(SubscribeOutput {
            subscription_id: subscription.subscription_id,
            role: granted,
        })
    }
}
