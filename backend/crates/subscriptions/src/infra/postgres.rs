//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::{CommunityId, SubscriptionId, UserId};
use kernel::page::Page;
use kernel::role::CommunityRole;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::Subscription;
use crate::domain::repository::SubscriptionRepository;
use crate::error::{SubscriptionError, SubscriptionResult};

const SELECT_SUBSCRIPTION: &str = r#"
    SELECT
        subscription_id,
        user_id,
        community_id,
        role_id,
        created_at
    FROM subscriptions
"#;

#[derive(Clone)]
pub struct PgSubscriptionRepository {
    pool: PgPool,
}

impl PgSubscriptionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl SubscriptionRepository for PgSubscriptionRepository {
    async fn create(&self, subscription: &Subscription) -> SubscriptionResult<()> {
        // UNIQUE (user_id, community_id) turns a duplicate into AlreadySubscribed
        sqlx::query(
            r#"
            INSERT INTO subscriptions (
                subscription_id,
                user_id,
                community_id,
                role_id,
                created_at
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(subscription.subscription_id.to_hex())
        .bind(subscription.user_id.as_uuid())
        .bind(subscription.community_id.as_uuid())
        .bind(subscription.role.id())
        .bind(subscription.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_id(
        &self,
        subscription_id: &SubscriptionId,
    ) -> SubscriptionResult<Option<Subscription>> {
        let sql = format!("{SELECT_SUBSCRIPTION} WHERE subscription_id = $1");
        let row = sqlx::query_as::<_, SubscriptionRow>(&sql)
            .bind(subscription_id.to_hex())
            .fetch_optional(&self.pool)
            .await?;

        row.map(SubscriptionRow::into_subscription).transpose()
    }

    async fn find_by_user_and_community(
        &self,
        user_id: &UserId,
        community_id: &CommunityId,
    ) -> SubscriptionResult<Option<Subscription>> {
        let sql = format!("{SELECT_SUBSCRIPTION} WHERE user_id = $1 AND community_id = $2");
        let row = sqlx::query_as::<_, SubscriptionRow>(&sql)
            .bind(user_id.as_uuid())
            .bind(community_id.as_uuid())
            .fetch_optional(&self.pool)
            .await?;

        row.map(SubscriptionRow::into_subscription).transpose()
    }

    async fn exists_by_user_and_community(
        &self,
        user_id: &UserId,
        community_id: &CommunityId,
    ) -> SubscriptionResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM subscriptions WHERE user_id = $1 AND community_id = $2)",
        )
        .bind(user_id.as_uuid())
        .bind(community_id.as_uuid())
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn list_by_user(
        &self,
        user_id: &UserId,
        page: Page,
    ) -> SubscriptionResult<Vec<Subscription>> {
        let sql = format!(
            "{SELECT_SUBSCRIPTION} WHERE user_id = $1 \
             ORDER BY created_at, subscription_id LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, SubscriptionRow>(&sql)
            .bind(user_id.as_uuid())
            .bind(i64::from(page.limit()))
            .bind(i64::from(page.offset()))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(SubscriptionRow::into_subscription)
            .collect()
    }

    async fn list_by_community(
        &self,
        community_id: &CommunityId,
        page: Page,
    ) -> SubscriptionResult<Vec<Subscription>> {
        let sql = format!(
            "{SELECT_SUBSCRIPTION} WHERE community_id = $1 \
             ORDER BY created_at, subscription_id LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, SubscriptionRow>(&sql)
            .bind(community_id.as_uuid())
            .bind(i64::from(page.limit()))
            .bind(i64::from(page.offset()))
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(SubscriptionRow::into_subscription)
            .collect()
    }

    async fn community_ids_of_user(&self, user_id: &UserId) -> SubscriptionResult<Vec<CommunityId>> {
        let ids: Vec<Uuid> = sqlx::query_scalar(
            "SELECT community_id FROM subscriptions WHERE user_id = $1 \
             ORDER BY created_at, subscription_id",
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;
        Ok(ids.into_iter().map(CommunityId::from_uuid).collect())
    }

    async fn count_by_community(&self, community_id: &CommunityId) -> SubscriptionResult<u64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM subscriptions WHERE community_id = $1")
                .bind(community_id.as_uuid())
                .fetch_one(&self.pool)
                .await?;
        u64::try_from(count).map_err(|e| SubscriptionError::Internal(e.to_string()))
    }

    async fn update_role(
        &self,
        subscription_id: &SubscriptionId,
        role: CommunityRole,
    ) -> SubscriptionResult<bool> {
        let result = sqlx::query("UPDATE subscriptions SET role_id = $2 WHERE subscription_id = $1")
            .bind(subscription_id.to_hex())
            .bind(role.id())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_user_and_community(
        &self,
        user_id: &UserId,
        community_id: &CommunityId,
    ) -> SubscriptionResult<bool> {
        let result =
            sqlx::query("DELETE FROM subscriptions WHERE user_id = $1 AND community_id = $2")
                .bind(user_id.as_uuid())
                .bind(community_id.as_uuid())
                .execute(&self.pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_community(&self, community_id: &CommunityId) -> SubscriptionResult<u64> {
        let result = sqlx::query("DELETE FROM subscriptions WHERE community_id = $1")
            .bind(community_id.as_uuid())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

#[derive(sqlx::FromRow)]
struct SubscriptionRow {
    subscription_id: String,
    user_id: Uuid,
    community_id: Uuid,
    role_id: i16,
    created_at: DateTime<Utc>,
}

impl SubscriptionRow {
    fn into_subscription(self) -> SubscriptionResult<Subscription> {
        let subscription_id = SubscriptionId::parse_str(&self.subscription_id)
            .map_err(|e| SubscriptionError::Internal(e.to_string()))?;
        let role = CommunityRole::from_id(self.role_id)
            .map_err(|e| SubscriptionError::Internal(e.to_string()))?;

        Ok(Subscription {
            subscription_id,
            user_id: UserId::from_uuid(self.user_id),
            community_id: CommunityId::from_uuid(self.community_id),
            role,
            created_at: self.created_at,
        })
    }
}
