//! Repository Traits

use kernel::id::{ProfileId, UserId};

use crate::domain::entities::User;
use crate::domain::value_objects::Username;
use crate::error::UsersResult;

#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    async fn create(&self, user: &User) -> UsersResult<()>;

    async fn find_by_user_id(&self, user_id: &UserId) -> UsersResult<Option<User>>;

    async fn find_by_profile_id(&self, profile_id: &ProfileId) -> UsersResult<Option<User>>;

    async fn find_by_username(&self, username: &Username) -> UsersResult<Option<User>>;

    async fn exists_by_user_id(&self, user_id: &UserId) -> UsersResult<bool>;

    async fn update(&self, user: &User) -> UsersResult<()>;
}
