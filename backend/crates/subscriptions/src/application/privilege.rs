//! Requester privilege lookup

use kernel::acl::{CommunitiesFacade, UsersFacade, resolve_ownership_with_identity_fallback};
use kernel::id::{CommunityId, UserId};

use crate::domain::policy::RequesterPrivilege;
use crate::domain::repository::SubscriptionRepository;
use crate::error::SubscriptionResult;

/// Ownership under either identity first; the persisted role is only read
/// when the requester is not the owner.
pub(crate) async fn requester_privilege<R, C, U>(
    subscription_repo: &R,
    communities: &C,
    users: &U,
    requester: &UserId,
    community_id: &CommunityId,
) -> SubscriptionResult<RequesterPrivilege>
where
    R: SubscriptionRepository,
    C: CommunitiesFacade,
    U: UsersFacade,
{
    let is_owner =
        resolve_ownership_with_identity_fallback(communities, users, community_id, requester)
            .await?;
    if is_owner {
        return Ok(RequesterPrivilege {
            is_owner: true,
            role: None,
        });
    }

    let role = subscription_repo
        .find_by_user_and_community(requester, community_id)
        .await?
        .map(|s| s.role);
    Ok(RequesterPrivilege {
        is_owner: false,
        role,
    })
}
