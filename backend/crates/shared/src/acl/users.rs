//! Facade exposed by the users context

use crate::error::app_error::AppResult;
use crate::id::{ProfileId, UserId};

#[trait_variant::make(UsersFacade: Send)]
pub trait LocalUsersFacade {
    async fn exists(&self, user_id: &UserId) -> AppResult<bool>;

    /// Profile-service identity of a user, `None` for unknown users
    async fn profile_id_of(&self, user_id: &UserId) -> AppResult<Option<ProfileId>>;

    /// Reverse lookup of [`profile_id_of`](LocalUsersFacade::profile_id_of)
    async fn user_id_of_profile(&self, profile_id: &ProfileId) -> AppResult<Option<UserId>>;

    async fn role_name_valid(&self, role_name: &str) -> AppResult<bool>;
}
