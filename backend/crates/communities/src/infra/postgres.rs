//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::acl::IdentityRef;
use kernel::id::CommunityId;
use kernel::page::Page;
use kernel::privacy::Privacy;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::Community;
use crate::domain::repository::CommunityRepository;
use crate::domain::value_objects::{AssetUrl, CommunityName, Description};
use crate::error::{CommunityError, CommunityResult};

const SELECT_COMMUNITY: &str = r#"
    SELECT
        community_id,
        owner_id,
        owner_kind,
        name,
        description,
        icon_url,
        banner_url,
        is_private,
        created_at,
        updated_at
    FROM communities
"#;

#[derive(Clone)]
pub struct PgCommunityRepository {
    pool: PgPool,
}

impl PgCommunityRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl CommunityRepository for PgCommunityRepository {
    async fn create(&self, community: &Community) -> CommunityResult<()> {
        sqlx::query(
            r#"
            INSERT INTO communities (
                community_id,
                owner_id,
                owner_kind,
                name,
                description,
                icon_url,
                banner_url,
                is_private,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(community.community_id.as_uuid())
        .bind(community.owner.as_uuid())
        .bind(community.owner.kind())
        .bind(community.name.as_str())
        .bind(community.description.as_str())
        .bind(community.icon_url.as_ref().map(AssetUrl::as_str))
        .bind(community.banner_url.as_ref().map(AssetUrl::as_str))
        .bind(community.privacy.is_private())
        .bind(community.created_at)
        .bind(community.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(&self, community_id: &CommunityId) -> CommunityResult<Option<Community>> {
        let sql = format!("{SELECT_COMMUNITY} WHERE community_id = $1");
        let row = sqlx::query_as::<_, CommunityRow>(&sql)
            .bind(community_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        row.map(CommunityRow::into_community).transpose()
    }

    async fn exists_by_id(&self, community_id: &CommunityId) -> CommunityResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM communities WHERE community_id = $1)")
                .bind(community_id.as_uuid())
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn list_by_owner(&self, owner: &Uuid, page: Page) -> CommunityResult<Vec<Community>> {
        let sql = format!(
            "{SELECT_COMMUNITY} WHERE owner_id = $1 ORDER BY created_at DESC LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, CommunityRow>(&sql)
            .bind(owner)
            .bind(i64::from(page.limit()))
            .bind(i64::from(page.offset()))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(CommunityRow::into_community).collect()
    }

    async fn list(&self, page: Page) -> CommunityResult<Vec<Community>> {
        let sql = format!(
            "{SELECT_COMMUNITY} ORDER BY created_at, community_id LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, CommunityRow>(&sql)
            .bind(i64::from(page.limit()))
            .bind(i64::from(page.offset()))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter().map(CommunityRow::into_community).collect()
    }

    async fn update(&self, community: &Community) -> CommunityResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE communities SET
                name = $2,
                description = $3,
                icon_url = $4,
                banner_url = $5,
                is_private = $6,
                updated_at = $7
            WHERE community_id = $1
            "#,
        )
        .bind(community.community_id.as_uuid())
        .bind(community.name.as_str())
        .bind(community.description.as_str())
        .bind(community.icon_url.as_ref().map(AssetUrl::as_str))
        .bind(community.banner_url.as_ref().map(AssetUrl::as_str))
        .bind(community.privacy.is_private())
        .bind(community.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(CommunityError::CommunityNotFound);
        }
        Ok(())
    }

    async fn delete(&self, community_id: &CommunityId) -> CommunityResult<bool> {
        let result = sqlx::query("DELETE FROM communities WHERE community_id = $1")
            .bind(community_id.as_uuid())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[derive(sqlx::FromRow)]
struct CommunityRow {
    community_id: Uuid,
    owner_id: Uuid,
    owner_kind: String,
    name: String,
    description: String,
    icon_url: Option<String>,
    banner_url: Option<String>,
    is_private: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CommunityRow {
    fn into_community(self) -> CommunityResult<Community> {
        let owner = IdentityRef::from_parts(&self.owner_kind, self.owner_id).ok_or_else(|| {
            CommunityError::Internal(format!("unknown owner kind: {}", self.owner_kind))
        })?;
        let name = CommunityName::new(&self.name).map_err(CommunityError::Internal)?;
        let description = Description::new(&self.description).map_err(CommunityError::Internal)?;
        let icon_url =
            AssetUrl::parse_optional(self.icon_url.as_deref()).map_err(CommunityError::Internal)?;
        let banner_url = AssetUrl::parse_optional(self.banner_url.as_deref())
            .map_err(CommunityError::Internal)?;

        Ok(Community {
            community_id: CommunityId::from_uuid(self.community_id),
            owner,
            name,
            description,
            icon_url,
            banner_url,
            privacy: Privacy::from_private_flag(self.is_private),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
