//! User queries

use std::sync::Arc;

use kernel::id::{ProfileId, UserId};

use crate::domain::entities::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_objects::Username;
use crate::error::{UsersError, UsersResult};

pub struct UserQueries<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
}

impl<R> UserQueries<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }

    pub async fn by_user_id(&self, user_id: &UserId) -> UsersResult<User> {
        self.user_repo
            .find_by_user_id(user_id)
            .await?
            .ok_or(UsersError::UserNotFound)
    }

    pub async fn by_profile_id(&self, profile_id: &ProfileId) -> UsersResult<User> {
        self.user_repo
            .find_by_profile_id(profile_id)
            .await?
            .ok_or(UsersError::UserNotFound)
    }

    pub async fn by_username(&self, username: &str) -> UsersResult<User> {
        let username =
            Username::new(username).map_err(|e| UsersError::Validation(e.to_string()))?;
        self.user_repo
            .find_by_username(&username)
            .await?
            .ok_or(UsersError::UserNotFound)
    }
}
