//! Repository Traits

use kernel::id::{CommunityId, SubscriptionId, UserId};
use kernel::page::Page;
use kernel::role::CommunityRole;

use crate::domain::entities::Subscription;
use crate::error::SubscriptionResult;

#[trait_variant::make(SubscriptionRepository: Send)]
pub trait LocalSubscriptionRepository {
    /// Insert; a second row for the same (user, community) is `AlreadySubscribed`
    async fn create(&self, subscription: &Subscription) -> SubscriptionResult<()>;

    async fn find_by_id(
        &self,
        subscription_id: &SubscriptionId,
    ) -> SubscriptionResult<Option<Subscription>>;

    async fn find_by_user_and_community(
        &self,
        user_id: &UserId,
        community_id: &CommunityId,
    ) -> SubscriptionResult<Option<Subscription>>;

    async fn exists_by_user_and_community(
        &self,
        user_id: &UserId,
        community_id: &CommunityId,
    ) -> SubscriptionResult<bool>;

    async fn list_by_user(&self, user_id: &UserId, page: Page)
    -> SubscriptionResult<Vec<Subscription>>;

    async fn list_by_community(
        &self,
        community_id: &CommunityId,
        page: Page,
    ) -> SubscriptionResult<Vec<Subscription>>;

    async fn community_ids_of_user(&self, user_id: &UserId) -> SubscriptionResult<Vec<CommunityId>>;

    async fn count_by_community(&self, community_id: &CommunityId) -> SubscriptionResult<u64>;

    /// Returns whether a row was updated
    async fn update_role(
        &self,
        subscription_id: &SubscriptionId,
        role: CommunityRole,
    ) -> SubscriptionResult<bool>;

    /// Returns whether a row was removed
    async fn delete_by_user_and_community(
        &self,
        user_id: &UserId,
        community_id: &CommunityId,
    ) -> SubscriptionResult<bool>;

    async fn delete_by_community(&self, community_id: &CommunityId) -> SubscriptionResult<u64>;
}
