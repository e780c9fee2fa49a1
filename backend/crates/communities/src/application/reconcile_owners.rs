//! Reconcile Owner Subscriptions
//!
//! Repairs owner subscriptions that a failed create-time compensation left
//! missing, including an owner who later self-subscribed as a plain member.
//! Every community is scanned in batches; a failure on one
//! community is counted and the scan continues.

use std::sync::Arc;

use kernel::acl::{IdentityRef, SubscriptionLifecycle, SubscriptionsFacade, UsersFacade};
use kernel::error::app_error::AppResult;
use kernel::id::UserId;
use kernel::page::Page;
use kernel::role::CommunityRole;

use crate::application::config::CommunitiesConfig;
use crate::domain::entities::Community;
use crate::domain::repository::CommunityRepository;
use crate::error::{CommunityError, CommunityResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    pub scanned: u64,
    pub repaired: u64,
    pub failed: u64,
}

enum OwnerCheck {
    Present,
    Repaired,
    Unresolvable,
}

pub struct ReconcileOwnersUseCase<R, U, S>
where
    R: CommunityRepository,
    U: UsersFacade,
    S: SubscriptionsFacade + SubscriptionLifecycle,
{
    community_repo: Arc<R>,
    users: Arc<U>,
    subscriptions: Arc<S>,
    config: Arc<CommunitiesConfig>,
}

impl<R, U, S> ReconcileOwnersUseCase<R, U, S>
where
    R: CommunityRepository,
    U: UsersFacade,
    S: SubscriptionsFacade + SubscriptionLifecycle,
{
    pub fn new(
        community_repo: Arc<R>,
        users: Arc<U>,
        subscriptions: Arc<S>,
        config: Arc<CommunitiesConfig>,
    ) -> Self {
        Self {
            community_repo,
            users,
            subscriptions,
            config,
        }
    }

    pub async fn execute(&self) -> CommunityResult<ReconcileReport> {
        self.scan().await.inspect_err(CommunityError::log)
    }

    async fn scan(&self) -> CommunityResult<ReconcileReport> {
        let mut page = Page::new(Some(self.config.reconcile_batch_size), None)
            .map_err(|e| CommunityError::Validation(e.message().to_string()))?;
        let mut report = ReconcileReport::default();

        loop {
            let batch = self.community_repo.list(page).await?;
            if batch.is_empty() {
                break;
            }

            for community in &batch {
                report.scanned += 1;
                match self.check(community).await {
                    Ok(OwnerCheck::Present) => {}
                    Ok(OwnerCheck::Repaired) => report.repaired += 1,
                    Ok(OwnerCheck::Unresolvable) => {
                        report.failed += 1;
                        tracing::warn!(
                            community_id = %community.community_id,
                            owner = %community.owner,
                            "Community owner cannot be resolved to a user"
                        );
                    }
                    Err(e) => {
                        report.failed += 1;
                        tracing::warn!(
                            community_id = %community.community_id,
                            error = %e,
                            "Owner subscription repair failed"
                        );
                    }
                }
            }

            if (batch.len() as u32) < page.limit() {
                break;
            }
            page = page.next();
        }

        tracing::info!(
            scanned = report.scanned,
            repaired = report.repaired,
            failed = report.failed,
            "Owner subscription reconciliation finished"
        );
        Ok(report)
    }

    async fn check(&self, community: &Community) -> AppResult<OwnerCheck> {
        let Some(owner_id) = self.owner_user_id(&community.owner).await? else {
            return Ok(OwnerCheck::Unresolvable);
        };

        let role = self
            .subscriptions
            .role_of(&owner_id, &community.community_id)
            .await?;
        if role == Some(CommunityRole::Owner) {
            return Ok(OwnerCheck::Present);
        }

        let subscription_id = self
            .subscriptions
            .create_owner_subscription(&owner_id, &community.community_id)
            .await?;
        tracing::info!(
            community_id = %community.community_id,
            owner_id = %owner_id,
            subscription_id = %subscription_id,
            previous_role = role.map(|r| r.code()).unwrap_or("none"),
            "Owner subscription restored"
        );
        Ok(OwnerCheck::Repaired)
    }

    async fn owner_user_id(&self, owner: &IdentityRef) -> AppResult<Option<UserId>> {
        match owner {
            IdentityRef::User(user_id) => Ok(Some(*user_id)),
            IdentityRef::Profile(profile_id) => self.users.user_id_of_profile(profile_id).await,
        }
    }
}
