//! Remove Reaction Use Case

use std::sync::Arc;

use kernel::id::{ReactionId, UserId};

use crate::domain::policy;
use crate::domain::repository::ReactionRepository;
use crate::error::{ReactionError, ReactionResult};

pub struct RemoveReactionInput {
    pub reaction_id: ReactionId,
    pub requested_by: UserId,
}

pub struct RemoveReactionUseCase<R>
where
    R: ReactionRepository,
{
    reaction_repo: Arc<R>,
}

impl<R> RemoveReactionUseCase<R>
where
    R: ReactionRepository,
{
    pub fn new(reaction_repo: Arc<R>) -> Self {
        Self { reaction_repo }
    }

    pub async fn execute(&self, input: RemoveReactionInput) -> ReactionResult<()> {
        self.remove(input).await.inspect_err(ReactionError::log)
    }

    async fn remove(&self, input: RemoveReactionInput) -> ReactionResult<()> {
        let reaction = self
            .reaction_repo
            .find_by_id(&input.reaction_id)
            .await?
            .ok_or(ReactionError::ReactionNotFound)?;

        policy::evaluate_removal(reaction.user_id == input.requested_by)
            .record("reaction.remove", input.requested_by, reaction.reaction_id)
            .into_result(ReactionError::Forbidden)?;

        if !self.reaction_repo.delete(&reaction.reaction_id).await? {
            return Err(ReactionError::ReactionNotFound);
        }

        tracing::info!(
            reaction_id = %reaction.reaction_id,
            post_id = %reaction.post_id,
            "Reaction removed"
        );
        Ok(())
    }
}
