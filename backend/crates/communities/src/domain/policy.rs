//! Management policy
//!
//! Only the owner (matched under either identity) may change or delete a
//! community.

use kernel::authz::{Decision, PolicyRule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommunityRule {
    OwnerManagement,
    OwnerOnly,
}

impl PolicyRule for CommunityRule {
    fn code(&self) -> &'static str {
        match self {
            CommunityRule::OwnerManagement => "owner_management",
            CommunityRule::OwnerOnly => "owner_only",
        }
    }

    fn message(&self) -> &'static str {
        match self {
            CommunityRule::OwnerManagement => "owner manages the community",
            CommunityRule::OwnerOnly => "only the community owner can manage the community",
        }
    }
}

pub fn evaluate_management(requester_is_owner: bool) -> Decision<CommunityRule> {
    if requester_is_owner {
        Decision::Allow(CommunityRule::OwnerManagement)
    } else {
        Decision::Deny(CommunityRule::OwnerOnly)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_owner_manages() {
        assert!(evaluate_management(true).is_allowed());
        assert_eq!(
            evaluate_management(false),
            Decision::Deny(CommunityRule::OwnerOnly)
        );
    }
}
