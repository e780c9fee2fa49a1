//! Update Banner Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::repository::UserRepository;
use crate::domain::value_objects::ExternalUrl;
use crate::error::{UsersError, UsersResult};

pub struct UpdateBannerInput {
    pub user_id: UserId,
    /// `None` or blank clears the banner
    pub banner_url: Option<String>,
}

pub struct UpdateBannerUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
}

impl<R> UpdateBannerUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: UpdateBannerInput) -> UsersResult<()> {
        self.update(input).await.inspect_err(UsersError::log)
    }

    async fn update(&self, input: UpdateBannerInput) -> UsersResult<()> {
        let banner_url = ExternalUrl::parse_optional(input.banner_url.as_deref())
            .map_err(UsersError::Validation)?;

        let mut user = self
            .user_repo
            .find_by_user_id(&input.user_id)
            .await?
            .ok_or(UsersError::UserNotFound)?;

        user.set_banner(banner_url);
        self.user_repo.update(&user).await?;

        tracing::info!(user_id = %user.user_id, "User banner updated");
        Ok(())
    }
}
