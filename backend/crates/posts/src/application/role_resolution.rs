//! Effective role of a user in a community

use kernel::acl::{
    CommunitiesFacade, SubscriptionsFacade, UsersFacade, resolve_ownership_with_identity_fallback,
};
use kernel::id::{CommunityId, UserId};
use kernel::role::CommunityRole;

use crate::domain::policy;
use crate::error::PostResult;

/// Persisted role, upgraded to `owner` when the user owns the community
/// under either identity. `None` means neither subscribed nor owner.
pub(crate) async fn resolve_effective_role<S, C, U>(
    subscriptions: &S,
    communities: &C,
    users: &U,
    user_id: &UserId,
    community_id: &CommunityId,
) -> PostResult<Option<CommunityRole>>
where
    S: SubscriptionsFacade,
    C: CommunitiesFacade,
    U: UsersFacade,
{
    let persisted = subscriptions.role_of(user_id, community_id).await?;
    if !policy::needs_ownership_fallback(persisted) {
        return Ok(persisted);
    }

    let owns =
        resolve_ownership_with_identity_fallback(communities, users, community_id, user_id).await?;
    if owns && persisted.is_none() {
        tracing::debug!(
            user_id = %user_id,
            community_id = %community_id,
            "Owner without subscription row, treating as owner"
        );
    }
    Ok(policy::effective_role(persisted, owns))
}
