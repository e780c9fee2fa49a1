//! Subscription policy
//!
//! Pure decision functions. Callers gather the facts (privacy, ownership,
//! requester role) and log the returned [`Decision`].

use kernel::authz::{Decision, PolicyRule};
use kernel::privacy::Privacy;
use kernel::role::CommunityRole;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionRule {
    SelfSubscription,
    OwnerDelegation,
    AdminDelegation,
    PrivateDelegationRequiresPrivilege,
    PublicDelegationForbidden,
    SelfRemoval,
    OwnerRemoval,
    AdminRemoval,
    RemovalRequiresPrivilege,
    TargetIsNotOwner,
    OwnerCannotUnsubscribe,
}

impl PolicyRule for SubscriptionRule {
    fn code(&self) -> &'static str {
        match self {
            SubscriptionRule::SelfSubscription => "self_subscription",
            SubscriptionRule::OwnerDelegation => "owner_delegation",
            SubscriptionRule::AdminDelegation => "admin_delegation",
            SubscriptionRule::PrivateDelegationRequiresPrivilege => {
                "private_delegation_requires_privilege"
            }
            SubscriptionRule::PublicDelegationForbidden => "public_delegation_forbidden",
            SubscriptionRule::SelfRemoval => "self_removal",
            SubscriptionRule::OwnerRemoval => "owner_removal",
            SubscriptionRule::AdminRemoval => "admin_removal",
            SubscriptionRule::RemovalRequiresPrivilege => "removal_requires_privilege",
            SubscriptionRule::TargetIsNotOwner => "target_is_not_owner",
            SubscriptionRule::OwnerCannotUnsubscribe => "owner_cannot_unsubscribe",
        }
    }

    fn message(&self) -> &'static str {
        match self {
            SubscriptionRule::SelfSubscription => "users may subscribe themselves",
            SubscriptionRule::OwnerDelegation => "owner adds users to a private community",
            SubscriptionRule::AdminDelegation => "admin adds users to a private community",
            SubscriptionRule::PrivateDelegationRequiresPrivilege => {
                "only owner or admins can add users to private communities"
            }
            SubscriptionRule::PublicDelegationForbidden => {
                "users can only subscribe themselves to public communities"
            }
            SubscriptionRule::SelfRemoval => "users may unsubscribe themselves",
            SubscriptionRule::OwnerRemoval => "owner removes a subscription",
            SubscriptionRule::AdminRemoval => "admin removes a subscription",
            SubscriptionRule::RemovalRequiresPrivilege => {
                "only community owner, admins, or the user themselves can remove subscriptions"
            }
            SubscriptionRule::TargetIsNotOwner => "target is not the community owner",
            SubscriptionRule::OwnerCannotUnsubscribe => {
                "owner cannot unsubscribe from their own community"
            }
        }
    }
}

/// What the requester holds in the community
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequesterPrivilege {
    /// Owner under either identity
    pub is_owner: bool,
    /// Persisted subscription role
    pub role: Option<CommunityRole>,
}

impl RequesterPrivilege {
    fn delegation_rule(&self) -> Option<SubscriptionRule> {
        if self.is_owner {
            Some(SubscriptionRule::OwnerDelegation)
        } else if self.role.is_some_and(|r| r.is_admin_or_owner()) {
            Some(SubscriptionRule::AdminDelegation)
        } else {
            None
        }
    }
}

/// Self-requests are always downgraded to `member`.
pub fn resolve_granted_role(is_self: bool, requested: CommunityRole) -> CommunityRole {
    if is_self {
        CommunityRole::Member
    } else {
        requested
    }
}

/// Whether [`evaluate_subscribe`] needs the requester's privilege.
pub fn requires_requester_privilege(is_self: bool, privacy: Privacy) -> bool {
    !is_self && privacy.is_private()
}

/// `requester` is only consulted for delegated requests on private communities.
pub fn evaluate_subscribe(
    is_self: bool,
    privacy: Privacy,
    requester: Option<RequesterPrivilege>,
) -> Decision<SubscriptionRule> {
    if is_self {
        return Decision::Allow(SubscriptionRule::SelfSubscription);
    }
    match privacy {
        Privacy::Public => Decision::Deny(SubscriptionRule::PublicDelegationForbidden),
        Privacy::Private => match requester.and_then(|p| p.delegation_rule()) {
            Some(rule) => Decision::Allow(rule),
            None => Decision::Deny(SubscriptionRule::PrivateDelegationRequiresPrivilege),
        },
    }
}

/// Who may remove the subscription. `requester` is ignored for self-requests.
pub fn evaluate_removal(
    is_self: bool,
    requester: Option<RequesterPrivilege>,
) -> Decision<SubscriptionRule> {
    if is_self {
        return Decision::Allow(SubscriptionRule::SelfRemoval);
    }
    match requester.and_then(|p| p.delegation_rule()) {
        Some(SubscriptionRule::OwnerDelegation) => Decision::Allow(SubscriptionRule::OwnerRemoval),
        Some(_) => Decision::Allow(SubscriptionRule::AdminRemoval),
        None => Decision::Deny(SubscriptionRule::RemovalRequiresPrivilege),
    }
}

/// The owner keeps their subscription regardless of who asks.
pub fn guard_owner_removal(target_is_owner: bool) -> Decision<SubscriptionRule> {
    if target_is_owner {
        Decision::Deny(SubscriptionRule::OwnerCannotUnsubscribe)
    } else {
        Decision::Allow(SubscriptionRule::TargetIsNotOwner)
    }
}
