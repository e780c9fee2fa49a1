//! PostgreSQL Repository Implementation

use chrono::{DateTime, Utc};
use kernel::id::{ProfileId, UserId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_objects::{ExternalUrl, Username};
use crate::error::{UsersError, UsersResult};

const SELECT_USER: &str = r#"
    SELECT
        user_id,
        profile_id,
        username,
        profile_url,
        banner_url,
        created_at,
        updated_at
    FROM users
"#;

#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_one_where(&self, clause: &str, value: Uuid) -> UsersResult<Option<User>> {
        let sql = format!("{SELECT_USER} WHERE {clause} = $1");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(value)
            .fetch_optional(&self.pool)
            .await?;
        row.map(UserRow::into_user).transpose()
    }
}

impl UserRepository for PgUserRepository {
    async fn create(&self, user: &User) -> UsersResult<()> {
        sqlx::query(
            r#"
            INSERT INTO users (
                user_id,
                profile_id,
                username,
                profile_url,
                banner_url,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.profile_id.as_uuid())
        .bind(user.username.as_str())
        .bind(user.profile_url.as_ref().map(ExternalUrl::as_str))
        .bind(user.banner_url.as_ref().map(ExternalUrl::as_str))
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> UsersResult<Option<User>> {
        self.fetch_one_where("user_id", *user_id.as_uuid()).await
    }

    async fn find_by_profile_id(&self, profile_id: &ProfileId) -> UsersResult<Option<User>> {
        self.fetch_one_where("profile_id", *profile_id.as_uuid()).await
    }

    async fn find_by_username(&self, username: &Username) -> UsersResult<Option<User>> {
        let sql = format!("{SELECT_USER} WHERE username = $1 ORDER BY created_at LIMIT 1");
        let row = sqlx::query_as::<_, UserRow>(&sql)
            .bind(username.as_str())
            .fetch_optional(&self.pool)
            .await?;
        row.map(UserRow::into_user).transpose()
    }

    async fn exists_by_user_id(&self, user_id: &UserId) -> UsersResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE user_id = $1)")
                .bind(user_id.as_uuid())
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    async fn update(&self, user: &User) -> UsersResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE users SET
                username = $2,
                profile_url = $3,
                banner_url = $4,
                updated_at = $5
            WHERE user_id = $1
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.username.as_str())
        .bind(user.profile_url.as_ref().map(ExternalUrl::as_str))
        .bind(user.banner_url.as_ref().map(ExternalUrl::as_str))
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(UsersError::UserNotFound);
        }
        Ok(())
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    profile_id: Uuid,
    username: String,
    profile_url: Option<String>,
    banner_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> UsersResult<User> {
        let username = Username::new(&self.username)
            .map_err(|e| UsersError::Internal(format!("stored username invalid: {e}")))?;
        let profile_url = ExternalUrl::parse_optional(self.profile_url.as_deref())
            .map_err(UsersError::Internal)?;
        let banner_url = ExternalUrl::parse_optional(self.banner_url.as_deref())
            .map_err(UsersError::Internal)?;

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            profile_id: ProfileId::from_uuid(self.profile_id),
            username,
            profile_url,
            banner_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
