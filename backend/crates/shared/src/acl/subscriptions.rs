//! Facades exposed by the subscriptions context

use crate::error::app_error::AppResult;
use crate::id::{CommunityId, SubscriptionId, UserId};
use crate::role::CommunityRole;

#[trait_variant::make(SubscriptionsFacade: Send)]
pub trait LocalSubscriptionsFacade {
    /// Persisted role of the user in the community, `None` when not subscribed
    async fn role_of(
        &self,
        user_id: &UserId,
        community_id: &CommunityId,
    ) -> AppResult<Option<CommunityRole>>;

    async fn is_subscribed(&self, user_id: &UserId, community_id: &CommunityId)
    -> AppResult<bool>;

    async fn communities_of(&self, user_id: &UserId) -> AppResult<Vec<CommunityId>>;
}

/// Write side used by the communities context for follow-up writes
#[trait_variant::make(SubscriptionLifecycle: Send)]
pub trait LocalSubscriptionLifecycle {
    /// Ensure the owner holds a subscription with role `owner`.
    ///
    /// An existing row for the pair keeps its id; a non-owner role on it is
    /// raised to `owner`.
    async fn create_owner_subscription(
        &self,
        owner_id: &UserId,
        community_id: &CommunityId,
    ) -> AppResult<SubscriptionId>;

    async fn remove_all_for_community(&self, community_id: &CommunityId) -> AppResult<u64>;
}
