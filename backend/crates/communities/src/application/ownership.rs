//! Owner gate shared by the management use cases

use kernel::acl::{UsersFacade, resolve_ownership_with_identity_fallback};
use kernel::id::{CommunityId, UserId};

use crate::application::communities_facade::CommunitiesFacadeImpl;
use crate::domain::policy::{self, CommunityRule};
use crate::domain::repository::CommunityRepository;
use crate::error::{CommunityError, CommunityResult};

pub(crate) async fn ensure_owner<R, U>(
    communities: &CommunitiesFacadeImpl<R>,
    users: &U,
    community_id: &CommunityId,
    requester: &UserId,
    gate: &'static str,
) -> CommunityResult<CommunityRule>
where
    R: CommunityRepository + Send + Sync,
    U: UsersFacade,
{
    let is_owner =
        resolve_ownership_with_identity_fallback(communities, users, community_id, requester)
            .await?;

    policy::evaluate_management(is_owner)
        .record(gate, requester, community_id)
        .into_result(CommunityError::Forbidden)
}
