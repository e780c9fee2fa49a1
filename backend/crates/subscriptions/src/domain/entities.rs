//! Subscription Entity

use chrono::{DateTime, Utc};
use kernel::id::{CommunityId, SubscriptionId, UserId};
use kernel::role::CommunityRole;
use serde::Serialize;

/// Membership of a user in a community
///
/// Roles are fixed at creation; there is no in-place role change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subscription {
    pub subscription_id: SubscriptionId,
    pub user_id: UserId,
    pub community_id: CommunityId,
    pub role: CommunityRole,
    pub created_at: DateTime<Utc>,
}

impl Subscription {
    pub fn new(user_id: UserId, community_id: CommunityId, role: CommunityRole) -> Self {
        Self {
            subscription_id: SubscriptionId::new(),
            user_id,
            community_id,
            role,
            created_at: Utc::now(),
        }
    }
}
