//! Read-side queries

use std::sync::Arc;

use kernel::id::{CommunityId, SubscriptionId, UserId};
use kernel::page::Page;

use crate::domain::entities::Subscription;
use crate::domain::repository::SubscriptionRepository;
use crate::error::{SubscriptionError, SubscriptionResult};

pub struct SubscriptionQueries<R>
where
    R: SubscriptionRepository,
{
    subscription_repo: Arc<R>,
}

impl<R> SubscriptionQueries<R>
where
    R: SubscriptionRepository,
{
    pub fn new(subscription_repo: Arc<R>) -> Self {
        Self { subscription_repo }
    }

    pub async fn by_id(&self, subscription_id: &SubscriptionId) -> SubscriptionResult<Subscription> {
        self.subscription_repo
            .find_by_id(subscription_id)
            .await?
            .ok_or(SubscriptionError::SubscriptionNotFound)
    }

    pub async fn of_user(&self, user_id: &UserId, page: Page) -> SubscriptionResult<Vec<Subscription>> {
        self.subscription_repo.list_by_user(user_id, page).await
    }

    pub async fn members_of(
        &self,
        community_id: &CommunityId,
        page: Page,
    ) -> SubscriptionResult<Vec<Subscription>> {
        self.subscription_repo
            .list_by_community(community_id, page)
            .await
    }

    pub async fn member_count(&self, community_id: &CommunityId) -> SubscriptionResult<u64> {
        self.subscription_repo.count_by_community(community_id).await
    }
}
