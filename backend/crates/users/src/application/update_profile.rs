//! Update Profile Use Case
//!
//! Applies a profile-updated event. Events for users this context has never
//! seen are skipped.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::repository::UserRepository;
use crate::domain::value_objects::{ExternalUrl, Username};
use crate::error::{UsersError, UsersResult};

pub struct UpdateProfileInput {
    pub user_id: UserId,
    pub username: String,
    pub profile_url: Option<String>,
}

pub struct UpdateProfileUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
}

impl<R> UpdateProfileUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }

    /// Returns whether a stored user was updated
    pub async fn execute(&self, input: UpdateProfileInput) -> UsersResult<bool> {
        self.update(input).await.inspect_err(UsersError::log)
    }

    async fn update(&self, input: UpdateProfileInput) -> UsersResult<bool> {
        let username =
            Username::new(&input.username).map_err(|e| UsersError::Validation(e.to_string()))?;
        let profile_url = ExternalUrl::parse_optional(input.profile_url.as_deref())
            .map_err(UsersError::Validation)?;

        let Some(mut user) = self.user_repo.find_by_user_id(&input.user_id).await? else {
            tracing::info!(user_id = %input.user_id, "Profile update for unknown user skipped");
            return Ok(false);
        };

        user.update_profile(username, profile_url);
        self.user_repo.update(&user).await?;

        tracing::info!(user_id = %user.user_id, username = %user.username, "User profile updated");
        Ok(true)
    }
}
