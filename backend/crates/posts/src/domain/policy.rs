//! Publish and delete policy

use kernel::authz::{Decision, PolicyRule};
use kernel::role::CommunityRole;

use crate::domain::value_objects::PostKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostRule {
    MemberPublish,
    PrivilegedPublish,
    PublishRequiresMembership,
    AnnouncementRequiresPrivilege,
    PrivilegedDelete,
    DeleteRequiresPrivilege,
}

impl PolicyRule for PostRule {
    fn code(&self) -> &'static str {
        match self {
            PostRule::MemberPublish => "member_publish",
            PostRule::PrivilegedPublish => "privileged_publish",
            PostRule::PublishRequiresMembership => "publish_requires_membership",
            PostRule::AnnouncementRequiresPrivilege => "announcement_requires_privilege",
            PostRule::PrivilegedDelete => "privileged_delete",
            PostRule::DeleteRequiresPrivilege => "delete_requires_privilege",
        }
    }

    fn message(&self) -> &'static str {
        match self {
            PostRule::MemberPublish => "members may publish messages",
            PostRule::PrivilegedPublish => "admins and owners may publish anything",
            PostRule::PublishRequiresMembership => "only members/owners can publish",
            PostRule::AnnouncementRequiresPrivilege => {
                "only community admins or owners can publish announcements"
            }
            PostRule::PrivilegedDelete => "admins and owners may delete posts",
            PostRule::DeleteRequiresPrivilege => "only admins or owners can delete posts",
        }
    }
}

/// The ownership fallback runs unless the persisted role already grants
/// admin-or-owner.
pub fn needs_ownership_fallback(persisted: Option<CommunityRole>) -> bool {
    !persisted.is_some_and(|role| role.is_admin_or_owner())
}

/// Role used for one decision. An ownership match counts as `owner` without
/// being persisted.
pub fn effective_role(persisted: Option<CommunityRole>, owns: bool) -> Option<CommunityRole> {
    if owns {
        Some(CommunityRole::Owner)
    } else {
        persisted
    }
}

pub fn evaluate_publish(role: Option<CommunityRole>, kind: PostKind) -> Decision<PostRule> {
    let Some(role) = role else {
        return Decision::Deny(PostRule::PublishRequiresMembership);
    };
    match (kind, role.is_admin_or_owner()) {
        (_, true) => Decision::Allow(PostRule::PrivilegedPublish),
        (PostKind::Message, false) => Decision::Allow(PostRule::MemberPublish),
        (PostKind::Announcement, false) => Decision::Deny(PostRule::AnnouncementRequiresPrivilege),
    }
}

pub fn evaluate_delete(role: Option<CommunityRole>) -> Decision<PostRule> {
    if role.is_some_and(|r| r.is_admin_or_owner()) {
        Decision::Allow(PostRule::PrivilegedDelete)
    } else {
        Decision::Deny(PostRule::DeleteRequiresPrivilege)
    }
}
