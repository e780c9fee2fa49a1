//! Delete Community Use Case
//!
//! Owner only. After the community row is gone, its subscriptions, posts and
//! the reactions on those posts are removed best-effort.

use std::sync::Arc;

use kernel::acl::{PostLifecycle, ReactionsFacade, SubscriptionLifecycle, UsersFacade};
use kernel::id::{CommunityId, UserId};
use kernel::outcome::Committed;

use crate::application::communities_facade::CommunitiesFacadeImpl;
use crate::application::ownership::ensure_owner;
use crate::domain::repository::CommunityRepository;
use crate::error::{CommunityError, CommunityResult};

pub struct DeleteCommunityInput {
    pub community_id: CommunityId,
    pub requested_by: UserId,
}

pub struct DeleteCommunityUseCase<R, U, S, P, X>
where
    R: CommunityRepository,
    U: UsersFacade,
    S: SubscriptionLifecycle,
    P: PostLifecycle,
    X: ReactionsFacade,
{
    community_repo: Arc<R>,
    communities: CommunitiesFacadeImpl<R>,
    users: Arc<U>,
    subscriptions: Arc<S>,
    posts: Arc<P>,
    reactions: Arc<X>,
}

impl<R, U, S, P, X> DeleteCommunityUseCase<R, U, S, P, X>
where
    R: CommunityRepository + Send + Sync,
    U: UsersFacade,
    S: SubscriptionLifecycle,
    P: PostLifecycle,
    X: ReactionsFacade,
{
    pub fn new(
        community_repo: Arc<R>,
        users: Arc<U>,
        subscriptions: Arc<S>,
        posts: Arc<P>,
        reactions: Arc<X>,
    ) -> Self {
        Self {
            communities: CommunitiesFacadeImpl::new(community_repo.clone()),
            community_repo,
            users,
            subscriptions,
            posts,
            reactions,
        }
    }

    pub async fn execute(
        &self,
        input: DeleteCommunityInput,
    ) -> CommunityResult<Committed<CommunityId>> {
        self.delete(input).await.inspect_err(CommunityError::log)
    }

    async fn delete(&self, input: DeleteCommunityInput) -> CommunityResult<Committed<CommunityId>> {
        let community_id = input.community_id;

        if !self.community_repo.exists_by_id(&community_id).await? {
            return Err(CommunityError::CommunityNotFound);
        }

        ensure_owner(
            &self.communities,
            self.users.as_ref(),
            &community_id,
            &input.requested_by,
            "community.delete",
        )
        .await?;

        if !self.community_repo.delete(&community_id).await? {
            return Err(CommunityError::CommunityNotFound);
        }

        tracing::info!(
            community_id = %community_id,
            requested_by = %input.requested_by,
            "Community deleted"
        );

        let mut outcome = Committed::new(community_id);

        let removed = self
            .subscriptions
            .remove_all_for_community(&community_id)
            .await;
        outcome.compensate(
            "subscriptions.remove_all_for_community",
            community_id,
            removed,
        );

        let deleted_posts = self.posts.delete_all_for_community(&community_id).await;
        let post_ids = outcome.compensate(
            "posts.delete_all_for_community",
            community_id,
            deleted_posts,
        );

        if let Some(post_ids) = post_ids.filter(|ids| !ids.is_empty()) {
            let cleared = self.reactions.remove_all_for_posts(&post_ids).await;
            outcome.compensate("reactions.remove_all_for_posts", community_id, cleared);
        }

        Ok(outcome)
    }
}
