//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::{ProfileId, UserId};

use crate::domain::value_objects::{ExternalUrl, Username};

/// Platform user as seen by the community contexts
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Authentication identity
    pub user_id: UserId,
    /// Profile-service identity
    pub profile_id: ProfileId,
    pub username: Username,
    pub profile_url: Option<ExternalUrl>,
    pub banner_url: Option<ExternalUrl>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    pub fn new(
        user_id: UserId,
        profile_id: ProfileId,
        username: Username,
        profile_url: Option<ExternalUrl>,
    ) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            profile_id,
            username,
            profile_url,
            banner_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn update_profile(&mut self, username: Username, profile_url: Option<ExternalUrl>) {
        self.username = username;
        self.profile_url = profile_url;
        self.updated_at = Utc::now();
    }

    pub fn set_banner(&mut self, banner_url: Option<ExternalUrl>) {
        self.banner_url = banner_url;
        self.updated_at = Utc::now();
    }
}
