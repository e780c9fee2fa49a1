//! Read-side queries

use std::collections::BTreeMap;
use std::sync::Arc;

use kernel::id::{PostId, UserId};
use kernel::page::Page;
use serde::Serialize;

use crate::domain::entities::Reaction;
use crate::domain::repository::ReactionRepository;
use crate::domain::value_objects::ReactionType;
use crate::error::ReactionResult;

/// Per-type totals of one post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReactionCounts {
    pub total: u64,
    pub by_type: BTreeMap<ReactionType, u64>,
}

impl ReactionCounts {
    pub fn of(&self, kind: ReactionType) -> u64 {
        self.by_type.get(&kind).copied().unwrap_or(0)
    }
}

pub struct ReactionQueries<R>
where
    R: ReactionRepository,
{
    reaction_repo: Arc<R>,
}

impl<R> ReactionQueries<R>
where
    R: ReactionRepository,
{
    pub fn new(reaction_repo: Arc<R>) -> Self {
        Self { reaction_repo }
    }

    pub async fn of_post(&self, post_id: &PostId, page: Page) -> ReactionResult<Vec<Reaction>> {
        self.reaction_repo.list_by_post(post_id, page).await
    }

    pub async fn counts(&self, post_id: &PostId) -> ReactionResult<ReactionCounts> {
        let by_type: BTreeMap<ReactionType, u64> = self
            .reaction_repo
            .count_by_post(post_id)
            .await?
            .into_iter()
            .collect();
        Ok(ReactionCounts {
            total: by_type.values().sum(),
            by_type,
        })
    }

    pub async fn of_user(
        &self,
        post_id: &PostId,
        user_id: &UserId,
    ) -> ReactionResult<Option<Reaction>> {
        self.reaction_repo
            .find_by_post_and_user(post_id, user_id)
            .await
    }
}
