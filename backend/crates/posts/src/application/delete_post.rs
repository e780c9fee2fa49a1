//! Delete Post Use Case
//!
//! Admins and owners only. Reactions on the post are removed afterwards as
//! a best-effort step in the reactions context.

use std::sync::Arc;

use kernel::acl::{CommunitiesFacade, ReactionsFacade, SubscriptionsFacade, UsersFacade};
use kernel::id::{PostId, UserId};
use kernel::outcome::Committed;

use crate::application::role_resolution::resolve_effective_role;
use crate::domain::policy;
use crate::domain::repository::PostRepository;
use crate::error::{PostError, PostResult};

pub struct DeletePostInput {
    pub post_id: PostId,
    pub requested_by: UserId,
}

pub struct DeletePostUseCase<R, C, U, S, X>
where
    R: PostRepository,
    C: CommunitiesFacade,
    U: UsersFacade,
    S: SubscriptionsFacade,
    X: ReactionsFacade,
{
    post_repo: Arc<R>,
    communities: Arc<C>,
    users: Arc<U>,
    subscriptions: Arc<S>,
    reactions: Arc<X>,
}

impl<R, C, U, S, X> DeletePostUseCase<R, C, U, S, X>
where
    R: PostRepository,
    C: CommunitiesFacade,
    U: UsersFacade,
    S: SubscriptionsFacade,
    X: ReactionsFacade,
{
    pub fn new(
        post_repo: Arc<R>,
        communities: Arc<C>,
        users: Arc<U>,
        subscriptions: Arc<S>,
        reactions: Arc<X>,
    ) -> Self {
        Self {
            post_repo,
            communities,
            users,
            subscriptions,
            reactions,
        }
    }

    pub async fn execute(&self, input: DeletePostInput) -> PostResult<Committed<PostId>> {
        self.delete(input).await.inspect_err(PostError::log)
    }

    async fn delete(&self, input: DeletePostInput) -> PostResult<Committed<PostId>> {
        let post = self
            .post_repo
            .find_by_id(&input.post_id)
            .await?
            .ok_or(PostError::PostNotFound)?;

        let role = resolve_effective_role(
            self.subscriptions.as_ref(),
            self.communities.as_ref(),
            self.users.as_ref(),
            &input.requested_by,
            &post.community_id,
        )
        .await?;

        policy::evaluate_delete(role)
            .record("post.delete", input.requested_by, post.post_id)
            .into_result(PostError::Forbidden)?;

        if !self.post_repo.delete(&post.post_id).await? {
            return Err(PostError::PostNotFound);
        }

        tracing::info!(
            post_id = %post.post_id,
            community_id = %post.community_id,
            requested_by = %input.requested_by,
            "Post deleted"
        );

        let mut outcome = Committed::new(post.post_id);
        let cleanup = self.reactions.remove_all_for_posts(&[post.post_id]).await;
        outcome.compensate("reactions.remove_all_for_posts", post.post_id, cleanup);

        Ok(outcome)
    }
}
