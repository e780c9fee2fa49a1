//! Unsubscribe Use Case

use std::sync::Arc;

use kernel::acl::{CommunitiesFacade, UsersFacade, resolve_ownership_with_identity_fallback};
use kernel::id::{CommunityId, UserId};

use crate::application::privilege::requester_privilege;
use crate::domain::policy;
use crate::domain::repository::SubscriptionRepository;
use crate::error::{SubscriptionError, SubscriptionResult};

pub struct UnsubscribeInput {
    pub user_id: UserId,
    pub community_id: CommunityId,
    pub requested_by: UserId,
}

pub struct UnsubscribeUseCase<R, C, U>
where
    R: SubscriptionRepository,
    C: CommunitiesFacade,
    U: UsersFacade,
{
    subscription_repo: Arc<R>,
    communities: Arc<C>,
    users: Arc<U>,
}

impl<R, C, U> UnsubscribeUseCase<R, C, U>
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

    pub async fn execute(&self, input: UnsubscribeInput) -> SubscriptionResult<()> {
        self.unsubscribe(input)
            .await
            .inspect_err(SubscriptionError::log)
    }

    async fn unsubscribe(&self, input: UnsubscribeInput) -> SubscriptionResult<()> {
        let UnsubscribeInput {
            user_id,
            community_id,
            requested_by,
        } = input;

        if !self.communities.exists(&community_id).await? {
            return Err(SubscriptionError::CommunityNotFound);
        }

        self.subscription_repo
            .find_by_user_and_community(&user_id, &community_id)
            .await?
            .ok_or(SubscriptionError::SubscriptionNotFound)?;

        let is_self = requested_by == user_id;
        let requester = if is_self {
            None
        } else {
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
        };
        policy::evaluate_removal(is_self, requester)
            .record("subscription.unsubscribe", requested_by, community_id)
            .into_result(SubscriptionError::Forbidden)?;

        // Target ownership is checked under both identities as well.
        let target_is_owner = resolve_ownership_with_identity_fallback(
            self.communities.as_ref(),
            self.users.as_ref(),
            &community_id,
            &user_id,
        )
        .await?;
        policy::guard_owner_removal(target_is_owner)
            .record("subscription.owner_guard", user_id, community_id)
            .into_result(SubscriptionError::Forbidden)?;

        if !self
            .subscription_repo
            .delete_by_user_and_community(&user_id, &community_id)
            .await?
        {
            return Err(SubscriptionError::SubscriptionNotFound);
        }

        tracing::info!(
            user_id = %user_id,
            community_id = %community_id,
            requested_by = %requested_by,
            "Subscription removed"
        );

        Ok(())
    }
}
