//! Add Reaction Use Case

use std::sync::Arc;

use kernel::acl::{PostsFacade, UsersFacade};
use kernel::id::{PostId, ReactionId, UserId};
use serde::Serialize;

use crate::domain::entities::Reaction;
use crate::domain::repository::ReactionRepository;
use crate::domain::value_objects::ReactionType;
use crate::error::{ReactionError, ReactionResult};

pub struct AddReactionInput {
    pub post_id: PostId,
    pub user_id: UserId,
    pub kind: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddReactionOutput {
    pub reaction_id: ReactionId,
    pub kind: ReactionType,
    /// `false` when an existing reaction was replaced
    pub created: bool,
}

pub struct AddReactionUseCase<R, P, U>
where
    R: ReactionRepository,
    P: PostsFacade,
    U: UsersFacade,
{
    reaction_repo: Arc<R>,
    posts: Arc<P>,
    users: Arc<U>,
}

impl<R, P, U> AddReactionUseCase<R, P, U>
where
    R: ReactionRepository,
    P: PostsFacade,
    U: UsersFacade,
{
    pub fn new(reaction_repo: Arc<R>, posts: Arc<P>, users: Arc<U>) -> Self {
        Self {
            reaction_repo,
            posts,
            users,
        }
    }

    pub async fn execute(&self, input: AddReactionInput) -> ReactionResult<AddReactionOutput> {
        self.add(input).await.inspect_err(ReactionError::log)
    }

    async fn add(&self, input: AddReactionInput) -> ReactionResult<AddReactionOutput> {
        let kind = ReactionType::parse(&input.kind).map_err(ReactionError::Validation)?;

        if !self.posts.exists(&input.post_id).await? {
            return Err(ReactionError::PostNotFound);
        }
        if !self.users.exists(&input.user_id).await? {
            return Err(ReactionError::UserNotFound);
        }

        let candidate = Reaction::new(input.post_id, input.user_id, kind);
        let stored = self.reaction_repo.upsert(&candidate).await?;
        let created = stored.reaction_id == candidate.reaction_id;

        tracing::info!(
            reaction_id = %stored.reaction_id,
            post_id = %stored.post_id,
            user_id = %stored.user_id,
            kind = %stored.kind,
            created,
            "Reaction saved"
        );

        Ok(AddReactionOutput {
            reaction_id: stored.reaction_id,
            kind: stored.kind,
            created,
        })
    }
}
