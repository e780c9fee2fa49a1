//! Publish Post Use Case

use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::acl::{CommunitiesFacade, SubscriptionsFacade, UsersFacade};
use kernel::id::{CommunityId, PostId, UserId};
use serde::Serialize;

use crate::application::role_resolution::resolve_effective_role;
use crate::domain::entities::Post;
use crate::domain::policy;
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::{PostContent, PostImages, PostKind};
use crate::error::{PostError, PostResult};

pub struct PublishPostInput {
    pub community_id: CommunityId,
    pub author_id: UserId,
    pub content: String,
    pub images: Vec<String>,
    pub kind: PostKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct PublishPostOutput {
    pub post_id: PostId,
    pub created_at: DateTime<Utc>,
}

pub struct PublishPostUseCase<R, C, U, S>
where
    R: PostRepository,
    C: CommunitiesFacade,
    U: UsersFacade,
    S: SubscriptionsFacade,
{
    post_repo: Arc<R>,
    communities: Arc<C>,
    users: Arc<U>,
    subscriptions: Arc<S>,
}

impl<R, C, U, S> PublishPostUseCase<R, C, U, S>
where
    R: PostRepository,
    C: CommunitiesFacade,
    U: UsersFacade,
    S: SubscriptionsFacade,
{
    pub fn new(post_repo: Arc<R>, communities: Arc<C>, users: Arc<U>, subscriptions: Arc<S>) -> Self {
        Self {
            post_repo,
            communities,
            users,
            subscriptions,
        }
    }

    pub async fn execute(&self, input: PublishPostInput) -> PostResult<PublishPostOutput> {
        self.publish(input).await.inspect_err(PostError::log)
    }

    async fn publish(&self, input: PublishPostInput) -> PostResult<PublishPostOutput> {
        let content = PostContent::new(&input.content).map_err(PostError::Validation)?;
        let images = PostImages::new(&input.images).map_err(PostError::Validation)?;

        if !self.communities.exists(&input.community_id).await? {
            return Err(PostError::CommunityNotFound);
        }
        if !self.users.exists(&input.author_id).await? {
            return Err(PostError::AuthorNotFound);
        }

        let role = resolve_effective_role(
            self.subscriptions.as_ref(),
            self.communities.as_ref(),
            self.users.as_ref(),
            &input.author_id,
            &input.community_id,
        )
        .await?;

        policy::evaluate_publish(role, input.kind)
            .record("post.publish", input.author_id, input.community_id)
            .into_result(PostError::Forbidden)?;

        let post = Post::new(
            input.community_id,
            input.author_id,
            input.kind,
            content,
            images,
        );
        self.post_repo.create(&post).await?;

        tracing::info!(
            post_id = %post.post_id,
            community_id = %post.community_id,
            author_id = %post.author_id,
            kind = %post.kind,
            "Post published"
        );

        Ok(PublishPostOutput {
            post_id: post.post_id,
            created_at: post.created_at,
        })
    }
}
