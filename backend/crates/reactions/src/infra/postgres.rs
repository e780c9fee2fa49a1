//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::{PostId, ReactionId, UserId};
use kernel::page::Page;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::Reaction;
use crate::domain::repository::ReactionRepository;
use crate::domain::value_objects::ReactionType;
use crate::error::{ReactionError, ReactionResult};

const REACTION_COLUMNS: &str = "reaction_id, post_id, user_id, kind, created_at, updated_at";

#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl ReactionRepository for PgReactionRepository {
    async fn upsert(&self, reaction: &Reaction) -> ReactionResult<Reaction> {
        let sql = format!(
            r#"
            INSERT INTO reactions ({REACTION_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (post_id, user_id) DO UPDATE SET
                kind = EXCLUDED.kind,
                updated_at = EXCLUDED.updated_at
            RETURNING {REACTION_COLUMNS}
            "#
        );
        let row = sqlx::query_as::<_, ReactionRow>(&sql)
            .bind(reaction.reaction_id.to_hex())
            .bind(reaction.post_id.to_hex())
            .bind(reaction.user_id.as_uuid())
            .bind(reaction.kind.code())
            .bind(reaction.created_at)
            .bind(reaction.updated_at)
            .fetch_one(&self.pool)
            .await?;

        row.into_reaction()
    }

    async fn find_by_id(&self, reaction_id: &ReactionId) -> ReactionResult<Option<Reaction>> {
        let sql = format!("SELECT {REACTION_COLUMNS} FROM reactions WHERE reaction_id = $1");
        let row = sqlx::query_as::<_, ReactionRow>(&sql)
            .bind(reaction_id.to_hex())
            .fetch_optional(&self.pool)
            .await?;

        row.map(ReactionRow::into_reaction).transpose()
    }

    async fn find_by_post_and_user(
        &self,
        post_id: &PostId,
        user_id: &UserId,
    ) -> ReactionResult<Option<Reaction>> {
        let sql = format!(
            "SELECT {REACTION_COLUMNS} FROM reactions WHERE post_id = $1 AND user_id = $2"
        );
        let row = sqlx::query_as::<_, ReactionRow>(&sql)
            .bind(post_id.to_hex())
            .bind(user_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        row.map(ReactionRow::into_reaction).transpose()
    }

    async fn list_by_post(&self, post_id: &PostId, page: Page) -> ReactionResult<Vec<Reaction>> {
        let sql = format!(
            "SELECT {REACTION_COLUMNS} FROM reactions WHERE post_id = $1 \
             ORDER BY created_at, reaction_id LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, ReactionRow>(&sql)
            .bind(post_id.to_hex())
            .bind(i64::from(page.limit()))
            .bind(i64::from(page.offset()))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(ReactionRow::into_reaction).collect()
    }

    async fn count_by_post(&self, post_id: &PostId) -> ReactionResult<Vec<(ReactionType, u64)>> {
        let rows: Vec<(String, i64)> = sqlx::query_as(
            "SELECT kind, COUNT(*) FROM reactions WHERE post_id = $1 GROUP BY kind ORDER BY kind",
        )
        .bind(post_id.to_hex())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|(kind, count)| {
                let kind = ReactionType::parse(&kind).map_err(ReactionError::Internal)?;
                let count =
                    u64::try_from(count).map_err(|e| ReactionError::Internal(e.to_string()))?;
                Ok((kind, count))
            })
            .collect()
    }

    async fn delete(&self, reaction_id: &ReactionId) -> ReactionResult<bool> {
        let result = sqlx::query("DELETE FROM reactions WHERE reaction_id = $1")
            .bind(reaction_id.to_hex())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_posts(&self, post_ids: &[PostId]) -> ReactionResult<u64> {
        let ids: Vec<String> = post_ids.iter().map(PostId::to_hex).collect();
        let result = sqlx::query("DELETE FROM reactions WHERE post_id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[derive(sqlx::FromRow)]
struct ReactionRow {
    reaction_id: String,
    post_id: String,
    user_id: Uuid,
    kind: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl ReactionRow {
    fn into_reaction(self) -> ReactionResult<Reaction> {
        let reaction_id = ReactionId::parse_str(&self.reaction_id)
            .map_err(|e| ReactionError::Internal(e.to_string()))?;
        let post_id =
            PostId::parse_str(&self.post_id).map_err(|e| ReactionError::Internal(e.to_string()))?;
        let kind = ReactionType::parse(&self.kind).map_err(ReactionError::Internal)?;

        Ok(Reaction {
            reaction_id,
            post_id,
            user_id: UserId::from_uuid(self.user_id),
            kind,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
