//! In-memory repository
//!
//! Used by tests and by local wiring without a database.

use std::collections::HashMap;

use kernel::id::{ProfileId, UserId};
use tokio::sync::RwLock;

use crate::domain::entities::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_objects::Username;
use crate::error::{UsersError, UsersResult};

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRepository for InMemoryUserRepository {
    async fn create(&self, user: &User) -> UsersResult<()> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.user_id) {
            return Err(UsersError::Internal(format!(
                "duplicate user id {}",
                user.user_id
            )));
        }
        users.insert(user.user_id, user.clone());
        Ok(())
    }

    async fn find_by_user_id(&self, user_id: &UserId) -> UsersResult<Option<User>> {
        Ok(self.users.read().await.get(user_id).cloned())
    }

    async fn find_by_profile_id(&self, profile_id: &ProfileId) -> UsersResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| &u.profile_id == profile_id)
            .cloned())
    }

    async fn find_by_username(&self, username: &Username) -> UsersResult<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .values()
            .find(|u| &u.username == username)
            .cloned())
    }

    async fn exists_by_user_id(&self, user_id: &UserId) -> UsersResult<bool> {
        Ok(self.users.read().await.contains_key(user_id))
    }

    async fn update(&self, user: &User) -> UsersResult<()> {
        let mut users = self.users.write().await;
        match users.get_mut(&user.user_id) {
            Some(stored) => {
                *stored = user.clone();
                Ok(())
            }
            None => Err(UsersError::UserNotFound),
        }
    }
}
