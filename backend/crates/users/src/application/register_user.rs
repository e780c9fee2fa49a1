//! Register User Use Case
//!
//! Handles the registration event published by the identity service.
//! Replays of the same event are absorbed.

use std::sync::Arc;

use kernel::id::{ProfileId, UserId};

use crate::domain::entities::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_objects::{ExternalUrl, Username};
use crate::error::{UsersError, UsersResult};

pub struct RegisterUserInput {
    pub user_id: UserId,
    pub profile_id: ProfileId,
    pub username: String,
    pub profile_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterUserOutput {
    pub user_id: UserId,
    /// `false` when the user was already known
    pub created: bool,
}

pub struct RegisterUserUseCase<R>
where
    R: UserRepository,
{
    user_repo: Arc<R>,
}

impl<R> RegisterUserUseCase<R>
where
    R: UserRepository,
{
    pub fn new(user_repo: Arc<R>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, input: RegisterUserInput) -> UsersResult<RegisterUserOutput> {
        self.register(input).await.inspect_err(UsersError::log)
    }

    async fn register(&self, input: RegisterUserInput) -> UsersResult<RegisterUserOutput> {
        let username =
            Username::new(&input.username).map_err(|e| UsersError::Validation(e.to_string()))?;
        let profile_url = ExternalUrl::parse_optional(input.profile_url.as_deref())
            .map_err(UsersError::Validation)?;

        if self.user_repo.exists_by_user_id(&input.user_id).await? {
            tracing::debug!(user_id = %input.user_id, "User already registered, skipping");
            return Ok(RegisterUserOutput {
                user_id: input.user_id,
                created: false,
            });
        }

        if let Some(existing) = self.user_repo.find_by_profile_id(&input.profile_id).await? {
            if existing.user_id != input.user_id {
                return Err(UsersError::ProfileAlreadyBound);
            }
        }

        let user = User::new(input.user_id, input.profile_id, username, profile_url);
        self.user_repo.create(&user).await?;

        tracing::info!(
            user_id = %user.user_id,
            profile_id = %user.profile_id,
            username = %user.username,
            "User registered"
        );

        Ok(RegisterUserOutput {
            user_id: user.user_id,
            created: true,
        })
    }
}
