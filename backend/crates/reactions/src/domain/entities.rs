//! Reaction Entity

use chrono::{DateTime, Utc};
use kernel::id::{PostId, ReactionId, UserId};
use serde::Serialize;

use crate::domain::value_objects::ReactionType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reaction {
    pub reaction_id: ReactionId,
    pub post_id: PostId,
    pub user_id: UserId,
    pub kind: ReactionType,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Reaction {
    pub fn new(post_id: PostId, user_id: UserId, kind: ReactionType) -> Self {
        let now = Utc::now();
        Self {
            reaction_id: ReactionId::new(),
            post_id,
            user_id,
            kind,
            created_at: now,
            updated_at: now,
        }
    }
}
