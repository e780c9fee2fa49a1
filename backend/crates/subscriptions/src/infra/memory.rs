//! In-memory repository

use std::collections::HashMap;

use kernel::id::{CommunityId, SubscriptionId, UserId};
use kernel::page::Page;
use kernel::role::CommunityRole;
use tokio::sync::RwLock;

use crate::domain::entities::Subscription;
use crate::domain::repository::SubscriptionRepository;
use crate::error::{SubscriptionError, SubscriptionResult};

/// Keyed by (user, community), which is also the uniqueness constraint
#[derive(Default)]
pub struct InMemorySubscriptionRepository {
    subscriptions: RwLock<HashMap<(UserId, CommunityId), Subscription>>,
}

impl InMemorySubscriptionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn oldest_first(mut items: Vec<Subscription>) -> Vec<Subscription> {
    items.sort_by(|a, b| {
        a.created_at
            .cmp(&b.created_at)
            .then_with(|| a.subscription_id.cmp(&b.subscription_id))
    });
    items
}

impl SubscriptionRepository for InMemorySubscriptionRepository {
    async fn create(&self, subscription: &Subscription) -> SubscriptionResult<()> {
        let mut subscriptions = self.subscriptions.write().await;
        let key = (subscription.user_id, subscription.community_id);
        if subscriptions.contains_key(&key) {
            return Err(SubscriptionError::AlreadySubscribed);
        }
        subscriptions.insert(key, subscription.clone());
        Ok(())
    }

    async fn find_by_id(
        &self,
        subscription_id: &SubscriptionId,
    ) -> SubscriptionResult<Option<Subscription>> {
        Ok(self
            .subscriptions
            .read()
            .await
            .values()
            .find(|s| &s.subscription_id == subscription_id)
            .cloned())
    }

    async fn find_by_user_and_community(
        &self,
        user_id: &UserId,
        community_id: &CommunityId,
    ) -> SubscriptionResult<Option<Subscription>> {
        Ok(self
            .subscriptions
            .read()
            .await
            .get(&(*user_id, *community_id))
            .cloned())
    }

    async fn exists_by_user_and_community(
        &self,
        user_id: &UserId,
        community_id: &CommunityId,
    ) -> SubscriptionResult<bool> {
        Ok(self
            .subscriptions
            .read()
            .await
            .contains_key(&(*user_id, *community_id)))
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
        page: Page,
    ) -> SubscriptionResult<Vec<Subscription>> {
        let subscriptions = self.subscriptions.read().await;
        let owned = subscriptions
            .values()
            .filter(|s| &s.user_id == user_id)
            .cloned()
            .collect();
        Ok(page.slice(oldest_first(owned)))
    }

    async fn list_by_community(
        &self,
        community_id: &CommunityId,
        page: Page,
    ) -> SubscriptionResult<Vec<Subscription>> {
        let subscriptions = self.subscriptions.read().await;
        let members = subscriptions
            .values()
            .filter(|s| &s.community_id == community_id)
            .cloned()
            .collect();
        Ok(page.slice(oldest_first(members)))
    }

    async fn community_ids_of_user(&self, user_id: &UserId) -> SubscriptionResult<Vec<CommunityId>> {
        let subscriptions = self.subscriptions.read().await;
        let owned = subscriptions
            .values()
            .filter(|s| &s.user_id == user_id)
            .cloned()
            .collect();
        Ok(oldest_first(owned)
            .into_iter()
            .map(|s| s.community_id)
            .collect())
    }

    async fn count_by_community(&self, community_id: &CommunityId) -> SubscriptionResult<u64> {
        let subscriptions = self.subscriptions.read().await;
        Ok(subscriptions
            .values()
            .filter(|s| &s.community_id == community_id)
            .count() as u64)
    }

    async fn update_role(
        &self,
        subscription_id: &SubscriptionId,
        role: CommunityRole,
    ) -> SubscriptionResult<bool> {
        let mut subscriptions = self.subscriptions.write().await;
        match subscriptions
            .values_mut()
            .find(|s| &s.subscription_id == subscription_id)
        {
            Some(subscription) => {
                subscription.role = role;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_by_user_and_community(
        &self,
        user_id: &UserId,
        community_id: &CommunityId,
    ) -> SubscriptionResult<bool> {
        Ok(self
            .subscriptions
            .write()
            .await
            .remove(&(*user_id, *community_id))
            .is_some())
    }

    async fn delete_by_community(&self, community_id: &CommunityId) -> SubscriptionResult<u64> {
        let mut subscriptions = self.subscriptions.write().await;
        let before = subscriptions.len();
        subscriptions.retain(|(_, c), _| c != community_id);
        Ok((before - subscriptions.len()) as u64)
    }
}
