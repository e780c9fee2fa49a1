//! Repository Traits

use kernel::id::CommunityId;
use kernel::page::Page;
use uuid::Uuid;

use crate::domain::entities::Community;
use crate::error::CommunityResult;

#[trait_variant::make(CommunityRepository: Send)]
pub trait LocalCommunityRepository {
    async fn create(&self, community: &Community) -> CommunityResult<()>;

    async fn find_by_id(&self, community_id: &CommunityId) -> CommunityResult<Option<Community>>;

    async fn exists_by_id(&self, community_id: &CommunityId) -> CommunityResult<bool>;

    /// Communities whose recorded owner has the given raw UUID, newest first
    async fn list_by_owner(&self, owner: &Uuid, page: Page) -> CommunityResult<Vec<Community>>;

    /// All communities, oldest first (stable for batch scans)
    async fn list(&self, page: Page) -> CommunityResult<Vec<Community>>;

    async fn update(&self, community: &Community) -> CommunityResult<()>;

    /// Returns whether a row was removed
    async fn delete(&self, community_id: &CommunityId) -> CommunityResult<bool>;
}
