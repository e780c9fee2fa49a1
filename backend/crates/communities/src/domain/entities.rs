//! Community Entity

use chrono::{DateTime, Utc};
use kernel::acl::IdentityRef;
use kernel::id::CommunityId;
use kernel::privacy::Privacy;

use crate::domain::value_objects::{AssetUrl, CommunityName, Description};

#[derive(Debug, Clone, PartialEq)]
pub struct Community {
    pub community_id: CommunityId,
    /// Owner as recorded at creation, under either identity
    pub owner: IdentityRef,
    pub name: CommunityName,
    pub description: Description,
    pub icon_url: Option<AssetUrl>,
    pub banner_url: Option<AssetUrl>,
    pub privacy: Privacy,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Community {
    pub fn new(
        owner: IdentityRef,
        name: CommunityName,
        description: Description,
        icon_url: Option<AssetUrl>,
        banner_url: Option<AssetUrl>,
        privacy: Privacy,
    ) -> Self {
        let now = Utc::now();
        Self {
            community_id: CommunityId::new(),
            owner,
            name,
            description,
            icon_url,
            banner_url,
            privacy,
            created_at: now,
            updated_at: now,
        }
    }

    /// Raw UUID match against the recorded owner
    pub fn is_owned_by(&self, candidate: &IdentityRef) -> bool {
        self.owner.same_uuid(candidate)
    }

    pub fn set_privacy(&mut self, privacy: Privacy) {
        self.privacy = privacy;
        self.updated_at = Utc::now();
    }

    pub fn update_info(
        &mut self,
        name: CommunityName,
        description: Description,
        icon_url: Option<AssetUrl>,
        banner_url: Option<AssetUrl>,
    ) {
        self.name = name;
        self.description = description;
        self.icon_url = icon_url;
        self.banner_url = banner_url;
        self.updated_at = Utc::now();
    }
}
