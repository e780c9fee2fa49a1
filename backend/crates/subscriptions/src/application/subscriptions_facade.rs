//! Subscriptions facade implementation

use std::sync::Arc;

use kernel::acl::{SubscriptionLifecycle, SubscriptionsFacade};
use kernel::error::app_error::{AppError, AppResult};
use kernel::id::{CommunityId, SubscriptionId, UserId};
use kernel::role::CommunityRole;

use crate::domain::entities::Subscription;
use crate::domain::repository::SubscriptionRepository;
use crate::error::SubscriptionError;

pub struct SubscriptionsFacadeImpl<R>
where
    R: SubscriptionRepository,
{
    subscription_repo: Arc<R>,
}

impl<R> SubscriptionsFacadeImpl<R>
where
    R: SubscriptionRepository + Send + Sync,
{
    pub fn new(subscription_repo: Arc<R>) -> Self {
        Self { subscription_repo }
    }

    async fn raise_to_owner(&self, existing: Subscription) -> AppResult<SubscriptionId> {
        if existing.role == CommunityRole::Owner {
            return Ok(existing.subscription_id);
        }

        if !self
            .subscription_repo
            .update_role(&existing.subscription_id, CommunityRole::Owner)
            .await?
        {
            return Err(AppError::internal("Owner subscription vanished before role update"));
        }
        tracing::warn!(
            subscription_id = %existing.subscription_id,
            owner_id = %existing.user_id,
            community_id = %existing.community_id,
            previous_role = %existing.role,
            "Owner subscription held a lower role, raised to owner"
        );
        Ok(existing.subscription_id)
    }
}

impl<R> SubscriptionsFacade for SubscriptionsFacadeImpl<R>
where
    R: SubscriptionRepository + Send + Sync,
{
    async fn role_of(
        &self,
        user_id: &UserId,
        community_id: &CommunityId,
    ) -> AppResult<Option<CommunityRole>> {
        let subscription = self
            .subscription_repo
            .find_by_user_and_community(user_id, community_id)
            .await?;
        Ok(subscription.map(|s| s.role))
    }

    async fn is_subscribed(
        &self,
        user_id: &UserId,
        community_id: &CommunityId,
    ) -> AppResult<bool> {
        Ok(self
            .subscription_repo
            .exists_by_user_and_community(user_id, community_id)
            .await?)
    }

    async fn communities_of(&self, user_id: &UserId) -> AppResult<Vec<CommunityId>> {
        Ok(self.subscription_repo.community_ids_of_user(user_id).await?)
    }
}

impl<R> SubscriptionLifecycle for SubscriptionsFacadeImpl<R>
where
    R: SubscriptionRepository + Send + Sync,
{
    async fn create_owner_subscription(
        &self,
        owner_id: &UserId,
        community_id: &CommunityId,
    ) -> AppResult<SubscriptionId> {
        if let Some(existing) = self
            .subscription_repo
            .find_by_user_and_community(owner_id, community_id)
            .await?
        {
            return self.raise_to_owner(existing).await;
        }

        let subscription = Subscription::new(*owner_id, *community_id, CommunityRole::Owner);
        match self.subscription_repo.create(&subscription).await {
            Ok(()) => {
                tracing::info!(
                    subscription_id = %subscription.subscription_id,
                    owner_id = %owner_id,
                    community_id = %community_id,
                    "Owner subscription created"
                );
                Ok(subscription.subscription_id)
            }
            // Lost a race with a concurrent insert for the same pair
            Err(SubscriptionError::AlreadySubscribed) => {
                let existing = self
                    .subscription_repo
                    .find_by_user_and_community(owner_id, community_id)
                    .await?
                    .ok_or_else(|| AppError::internal("Owner subscription vanished after conflict"))?;
                self.raise_to_owner(existing).await
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn remove_all_for_community(&self, community_id: &CommunityId) -> AppResult<u64> {
        let removed = self
            .subscription_repo
            .delete_by_community(community_id)
            .await?;
        tracing::info!(community_id = %community_id, removed, "Community subscriptions removed");
        Ok(removed)
    }
}
