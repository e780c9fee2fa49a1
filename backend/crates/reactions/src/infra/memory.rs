//! In-memory repository

use std::collections::{BTreeMap, HashMap};

use chrono::Utc;
use kernel::id::{PostId, ReactionId, UserId};
use kernel::page::Page;
use tokio::sync::RwLock;

use crate::domain::entities::Reaction;
use crate::domain::repository::ReactionRepository;
use crate::domain::value_objects::ReactionType;
use crate::error::ReactionResult;

/// Keyed by (post, user), the uniqueness constraint
#[derive(Default)]
pub struct InMemoryReactionRepository {
    reactions: RwLock<HashMap<(PostId, UserId), Reaction>>,
}

impl InMemoryReactionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ReactionRepository for InMemoryReactionRepository {
    async fn upsert(&self, reaction: &Reaction) -> ReactionResult<Reaction> {
        let mut reactions = self.reactions.write().await;
        let stored = reactions
            .entry((reaction.post_id, reaction.user_id))
            .and_modify(|existing| {
                existing.kind = reaction.kind;
                existing.updated_at = Utc::now();
            })
            .or_insert_with(|| reaction.clone());
        Ok(stored.clone())
    }

    async fn find_by_id(&self, reaction_id: &ReactionId) -> ReactionResult<Option<Reaction>> {
        Ok(self
            .reactions
            .read()
            .await
            .values()
            .find(|r| &r.reaction_id == reaction_id)
            .cloned())
    }

    async fn find_by_post_and_user(
        &self,
        post_id: &PostId,
        user_id: &UserId,
    ) -> ReactionResult<Option<Reaction>> {
        Ok(self
            .reactions
            .read()
            .await
            .get(&(*post_id, *user_id))
            .cloned())
    }

    async fn list_by_post(&self, post_id: &PostId, page: Page) -> ReactionResult<Vec<Reaction>> {
        let reactions = self.reactions.read().await;
        let mut matching: Vec<Reaction> = reactions
            .values()
            .filter(|r| &r.post_id == post_id)
            .cloned()
            .collect();
        matching.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.reaction_id.cmp(&b.reaction_id))
        });
        Ok(page.slice(matching))
    }

    async fn count_by_post(&self, post_id: &PostId) -> ReactionResult<Vec<(ReactionType, u64)>> {
        let reactions = self.reactions.read().await;
        let mut counts: BTreeMap<ReactionType, u64> = BTreeMap::new();
        for reaction in reactions.values().filter(|r| &r.post_id == post_id) {
            *counts.entry(reaction.kind).or_default() += 1;
        }
        Ok(counts.into_iter().collect())
    }

    async fn delete(&self, reaction_id: &ReactionId) -> ReactionResult<bool> {
        let mut reactions = self.reactions.write().await;
        let before = reactions.len();
        reactions.retain(|_, r| &r.reaction_id != reaction_id);
        Ok(reactions.len() < before)
    }

    async fn delete_by_posts(&self, post_ids: &[PostId]) -> ReactionResult<u64> {
        let mut reactions = self.reactions.write().await;
        let before = reactions.len();
        reactions.retain(|(post_id, _), _| !post_ids.contains(post_id));
        Ok((before - reactions.len()) as u64)
    }
}
