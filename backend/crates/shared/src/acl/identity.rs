//! Dual identity
//!
//! A user is known under two ids: the authentication `UserId` and the
//! profile-service `ProfileId`. Communities record their owner under one of
//! them, so ownership is reconciled here and nowhere else.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::acl::communities::CommunitiesFacade;
use crate::acl::users::UsersFacade;
use crate::error::app_error::AppResult;
use crate::id::{CommunityId, ProfileId, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum IdentityRef {
    User(UserId),
    Profile(ProfileId),
}

impl IdentityRef {
    pub fn as_uuid(&self) -> &Uuid {
        match self {
            IdentityRef::User(id) => id.as_uuid(),
            IdentityRef::Profile(id) => id.as_uuid(),
        }
    }

    pub const fn kind(&self) -> &'static str {
        match self {
            IdentityRef::User(_) => "user",
            IdentityRef::Profile(_) => "profile",
        }
    }

    /// Rebuild from the persisted `(kind, uuid)` pair
    pub fn from_parts(kind: &str, uuid: Uuid) -> Option<Self> {
        match kind {
            "user" => Some(IdentityRef::User(UserId::from_uuid(uuid))),
            "profile" => Some(IdentityRef::Profile(ProfileId::from_uuid(uuid))),
            _ => None,
        }
    }

    /// Raw UUID comparison, ignoring the identity kind
    pub fn same_uuid(&self, other: &IdentityRef) -> bool {
        self.as_uuid() == other.as_uuid()
    }
}

impl fmt::Display for IdentityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind(), self.as_uuid())
    }
}

/// Whether `user_id` owns the community under either of its identities.
///
/// The user id is tried first; the profile id is only looked up when that
/// does not match.
pub async fn resolve_ownership_with_identity_fallback<C, U>(
    communities: &C,
    users: &U,
    community_id: &CommunityId,
    user_id: &UserId,
) -> AppResult<bool>
where
    C: CommunitiesFacade,
    U: UsersFacade,
{
    if communities
        .is_owner(community_id, IdentityRef::User(*user_id))
        .await?
    {
        return Ok(true);
    }

    let Some(profile_id) = users.profile_id_of(user_id).await? else {
        return Ok(false);
    };

    let owns = communities
        .is_owner(community_id, IdentityRef::Profile(profile_id))
        .await?;
    if owns {
        tracing::debug!(
            community_id = %community_id,
            user_id = %user_id,
            profile_id = %profile_id,
            "Community ownership matched through profile id"
        );
    }
    Ok(owns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::acl::fake::{FakeCommunities, FakeUsers};
    use crate::privacy::Privacy;

    #[tokio::test]
    async fn test_direct_user_id_match() {
        let communities = FakeCommunities::default();
        let users = FakeUsers::default();
        let owner = UserId::new();
        let community = CommunityId::new();
        communities.insert(community, IdentityRef::User(owner), Privacy::Public);
        users.insert(owner, None);

        let owns = resolve_ownership_with_identity_fallback(&communities, &users, &community, &owner)
            .await
            .unwrap();
        assert!(owns);
    }

    #[tokio::test]
    async fn test_profile_id_fallback_match() {
        let communities = FakeCommunities::default();
        let users = FakeUsers::default();
        let owner = UserId::new();
        let profile = ProfileId::new();
        let community = CommunityId::new();
        communities.insert(community, IdentityRef::Profile(profile), Privacy::Private);
        users.insert(owner, Some(profile));

        let owns = resolve_ownership_with_identity_fallback(&communities, &users, &community, &owner)
            .await
            .unwrap();
        assert!(owns);
    }

    #[tokio::test]
    async fn test_unrelated_user_and_profile_do_not_match() {
        let communities = FakeCommunities::default();
        let users = FakeUsers::default();
        let community = CommunityId::new();
        communities.insert(
            community,
            IdentityRef::Profile(ProfileId::new()),
            Privacy::Public,
        );
        let stranger = UserId::new();
        users.insert(stranger, Some(ProfileId::new()));

        let owns =
            resolve_ownership_with_identity_fallback(&communities, &users, &community, &stranger)
                .await
                .unwrap();
        assert!(!owns);
    }

    #[tokio::test]
    async fn test_upstream_failure_propagates() {
        let communities = FakeCommunities::default();
        let users = FakeUsers::default();
        communities.fail_all();

        let result = resolve_ownership_with_identity_fallback(
            &communities,
            &users,
            &CommunityId::new(),
            &UserId::new(),
        )
        .await;
        assert!(result.unwrap_err().is_server_error());
    }

    #[test]
    fn test_identity_ref_parts_roundtrip() {
        let profile = IdentityRef::Profile(ProfileId::new());
        let rebuilt = IdentityRef::from_parts(profile.kind(), *profile.as_uuid()).unwrap();
        assert_eq!(rebuilt, profile);
        assert!(IdentityRef::from_parts("team", Uuid::new_v4()).is_none());
    }
}
