//! Users facade implementation

use std::sync::Arc;

use kernel::acl::UsersFacade;
use kernel::error::app_error::AppResult;
use kernel::id::{ProfileId, UserId};
use kernel::role::CommunityRole;

use crate::domain::repository::UserRepository;

pub struct UsersFacadeImpl<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
}

impl<R> UsersFacadeImpl<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }
}

impl<R> UsersFacade for UsersFacadeImpl<R>
where
    R: UserRepository + Send + Sync,
{
    async fn exists(&self, user_id: &UserId) -> AppResult<bool> {
        Ok(self.user_repo.exists_by_user_id(user_id).await?)
    }

    async fn profile_id_of(&self, user_id: &UserId) -> AppResult<Option<ProfileId>> {
        let user = self.user_repo.find_by_user_id(user_id).await?;
        Ok(user.map(|u| u.profile_id))
    }

    async fn user_id_of_profile(&self, profile_id: &ProfileId) -> AppResult<Option<UserId>> {
        let user = self.user_repo.find_by_profile_id(profile_id).await?;
        Ok(user.map(|u| u.user_id))
    }

    async fn role_name_valid(&self, role_name: &str) -> AppResult<bool> {
        Ok(CommunityRole::parse(role_name).is_ok())
    }
}
