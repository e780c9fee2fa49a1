//! Get User Feed Use Case

use std::sync::Arc;

use kernel::acl::{PostSummary, PostsFacade, SubscriptionsFacade};
use kernel::id::UserId;
use kernel::page::Page;
use serde::Serialize;

use crate::error::{FeedError, FeedResult};

pub struct GetUserFeedInput {
    pub user_id: UserId,
    pub page: Page,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserFeed {
    pub items: Vec<PostSummary>,
    pub limit: u32,
    pub offset: u32,
}

pub struct GetUserFeedUseCase<S, P>
where
    S: SubscriptionsFacade,
    P: PostsFacade,
{
    subscriptions: Arc<S>,
    posts: Arc<P>,
}

impl<S, P> GetUserFeedUseCase<S, P>
where
    S: SubscriptionsFacade,
    P: PostsFacade,
{
    pub fn new(subscriptions: Arc<S>, posts: Arc<P>) -> Self {
        Self {
            subscriptions,
            posts,
        }
    }

    pub async fn execute(&self, input: GetUserFeedInput) -> FeedResult<UserFeed> {
        self.feed(input).await.inspect_err(FeedError::log)
    }

    async fn feed(&self, input: GetUserFeedInput) -> FeedResult<UserFeed> {
        let communities = self.subscriptions.communities_of(&input.user_id).await?;

        let items = if communities.is_empty() {
            Vec::new()
        } else {
            self.posts
                .posts_for_communities(&communities, input.page)
                .await?
        };

        tracing::debug!(
            user_id = %input.user_id,
            communities = communities.len(),
            items = items.len(),
            "Feed assembled"
        );

        Ok(UserFeed {
            items,
            limit: input.page.limit(),
            offset: input.page.offset(),
        })
    }
}
