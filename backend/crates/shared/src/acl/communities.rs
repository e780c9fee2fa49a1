//! Facade exposed by the communities context

use crate::acl::identity::IdentityRef;
use crate::error::app_error::AppResult;
use crate::id::CommunityId;
use crate::privacy::Privacy;

#[trait_variant::make(CommunitiesFacade: Send)]
pub trait LocalCommunitiesFacade {
    async fn exists(&self, community_id: &CommunityId) -> AppResult<bool>;

    /// Visibility of the community. Unknown communities are `NotFound`.
    async fn privacy(&self, community_id: &CommunityId) -> AppResult<Privacy>;

    /// Owner reference as recorded at creation time
    async fn owner_id(&self, community_id: &CommunityId) -> AppResult<IdentityRef>;

    /// Whether `candidate` is the recorded owner.
    ///
    /// Only the raw UUID is compared; the identity kind the community was
    /// created with is not known to callers, see
    /// [`resolve_ownership_with_identity_fallback`](crate::acl::identity::resolve_ownership_with_identity_fallback).
    /// Unknown communities answer `false`.
    async fn is_owner(&self, community_id: &CommunityId, candidate: IdentityRef)
    -> AppResult<bool>;
}
