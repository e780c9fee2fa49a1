//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::{CommunityId, PostId, UserId};
use kernel::page::Page;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::Post;
use crate::domain::repository::PostRepository;
use crate::domain::value_objects::{PostContent, PostImages, PostKind};
use crate::error::{PostError, PostResult};

const SELECT_POST: &str = r#"
    SELECT
        post_id,
        community_id,
        author_id,
        kind,
        content,
        images,
        created_at,
        updated_at
    FROM posts
"#;

#[derive(Clone)]
pub struct PgPostRepository {
    pool: PgPool,
}

impl PgPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl PostRepository for PgPostRepository {
    async fn create(&self, post: &Post) -> PostResult<()> {
        sqlx::query(
            r#"
            INSERT INTO posts (
                post_id,
                community_id,
                author_id,
                kind,
                content,
                images,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(post.post_id.to_hex())
        .bind(post.community_id.as_uuid())
        .bind(post.author_id.as_uuid())
        .bind(post.kind.code())
        .bind(post.content.as_str())
        .bind(post.images.to_strings())
        .bind(post.created_at)
        .bind(post.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, post_id: &PostId) -> PostResult<Option<Post>> {
        let sql = format!("{SELECT_POST} WHERE post_id = $1");
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(post_id.to_hex())
            .fetch_optional(&self.pool)
            .await?;

        row.map(PostRow::into_post).transpose()
    }

    async fn exists_by_id(&self, post_id: &PostId) -> PostResult<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM posts WHERE post_id = $1)")
            .bind(post_id.to_hex())
            .fetch_one(&self.pool)
            .await?;
        Ok(exists)
    }

    async fn list_by_community(
        &self,
        community_id: &CommunityId,
        page: Page,
    ) -> PostResult<Vec<Post>> {
        let sql = format!(
            "{SELECT_POST} WHERE community_id = $1 \
             ORDER BY created_at DESC, post_id DESC LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .bind(community_id.as_uuid())
            .bind(i64::from(page.limit()))
            .bind(i64::from(page.offset()))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(PostRow::into_post).collect()
    }

    async fn list_by_communities(
        &self,
        community_ids: &[CommunityId],
        page: Page,
    ) -> PostResult<Vec<Post>> {
        let ids: Vec<Uuid> = community_ids.iter().map(|id| *id.as_uuid()).collect();
        let sql = format!(
            "{SELECT_POST} WHERE community_id = ANY($1) \
             ORDER BY created_at DESC, post_id DESC LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .bind(ids)
            .bind(i64::from(page.limit()))
            .bind(i64::from(page.offset()))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(PostRow::into_post).collect()
    }

    async fn delete(&self, post_id: &PostId) -> PostResult<bool> {
        let result = sqlx::query("DELETE FROM posts WHERE post_id = $1")
            .bind(post_id.to_hex())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_community(&self, community_id: &CommunityId) -> PostResult<Vec<PostId>> {
        let removed: Vec<String> =
            sqlx::query_scalar("DELETE FROM posts WHERE community_id = $1 RETURNING post_id")
                .bind(community_id.as_uuid())
                .fetch_all(&self.pool)
                .await?;

        removed
            .iter()
            .map(|raw| PostId::parse_str(raw).map_err(|e| PostError::Internal(e.to_string())))
            .collect()
    }
}

#[derive(sqlx::FromRow)]
struct PostRow {
    post_id: String,
    community_id: Uuid,
    author_id: Uuid,
    kind: String,
    content: String,
    images: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PostRow {
    fn into_post(self) -> PostResult<Post> {
        let post_id =
            PostId::parse_str(&self.post_id).map_err(|e| PostError::Internal(e.to_string()))?;
        let kind = PostKind::parse(&self.kind).map_err(PostError::Internal)?;
        let content = PostContent::new(&self.content).map_err(PostError::Internal)?;
        let images = PostImages::new(&self.images).map_err(PostError::Internal)?;

        Ok(Post {
            post_id,
            community_id: CommunityId::from_uuid(self.community_id),
            author_id: UserId::from_uuid(self.author_id),
            kind,
            content,
            images,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
