//! Community roles
//!
//! Closed set of roles a subscription can carry. Privilege order is
//! member < admin ≈ owner: both admin and owner pass "admin-or-owner" gates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::app_error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommunityRole {
    #[default]
    Member,
    Admin,
    Owner,
}

impl CommunityRole {
    pub const ALL: [CommunityRole; 3] = [
        CommunityRole::Member,
        CommunityRole::Admin,
        CommunityRole::Owner,
    ];

    /// Stable numeric id, persisted in `subscriptions.role_id`
    pub const fn id(&self) -> i16 {
        match self {
            CommunityRole::Member => 1,
            CommunityRole::Admin => 2,
            CommunityRole::Owner => 3,
        }
    }

    pub const fn code(&self) -> &'static str {
        match self {
            CommunityRole::Member => "member",
            CommunityRole::Admin => "admin",
            CommunityRole::Owner => "owner",
        }
    }

    pub fn from_id(id: i16) -> AppResult<Self> {
        Self::ALL
            .into_iter()
            .find(|role| role.id() == id)
            .ok_or_else(|| AppError::bad_request(format!("Unknown community role id: {}", id)))
    }

    /// Parse a role name. Surrounding whitespace and case are ignored.
    pub fn parse(name: &str) -> AppResult<Self> {
        let normalized = name.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|role| role.code() == normalized)
            .ok_or_else(|| AppError::bad_request(format!("Invalid community role: {}", name)))
    }

    pub const fn is_admin_or_owner(&self) -> bool {
        matches!(self, CommunityRole::Admin | CommunityRole::Owner)
    }

    pub const fn is_owner(&self) -> bool {
        matches!(self, CommunityRole::Owner)
    }
}

impl fmt::Display for CommunityRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for CommunityRole {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_case_and_whitespace() {
        assert_eq!(CommunityRole::parse(" Admin ").unwrap(), CommunityRole::Admin);
        assert_eq!("OWNER".parse::<CommunityRole>().unwrap(), CommunityRole::Owner);
    }

    #[test]
    fn test_parse_rejects_unknown_role() {
        assert!(CommunityRole::parse("moderator").is_err());
        assert!(CommunityRole::parse("").is_err());
    }

    #[test]
    fn test_id_roundtrip_for_every_role() {
        for role in CommunityRole::ALL {
            assert_eq!(CommunityRole::from_id(role.id()).unwrap(), role);
        }
        assert!(CommunityRole::from_id(0).is_err());
    }

    #[test]
    fn test_admin_or_owner() {
        assert!(!CommunityRole::Member.is_admin_or_owner());
        assert!(CommunityRole::Admin.is_admin_or_owner());
        assert!(CommunityRole::Owner.is_admin_or_owner());
    }

    #[test]
    fn test_default_is_member() {
        assert_eq!(CommunityRole::default(), CommunityRole::Member);
    }
}
