//! Unit tests for the users context

#[cfg(test)]
mod register_tests {
    use std::sync::Arc;

    use kernel::id::{ProfileId, UserId};

    use crate::application::{RegisterUserInput, RegisterUserUseCase, UserQueries};
    use crate::error::UsersError;
    use crate::infra::memory::InMemoryUserRepository;

    fn input(user_id: UserId, profile_id: ProfileId, username: &str) -> RegisterUserInput {
        RegisterUserInput {
            user_id,
            profile_id,
            username: username.to_string(),
            profile_url: Some("https://cdn.example.com/p.png".to_string()),
        }
    }

    #[tokio::test]
    async fn test_register_creates_user() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let use_case = RegisterUserUseCase::new(repo.clone());
        let user_id = UserId::new();
        let profile_id = ProfileId::new();

        let output = use_case
            .execute(input(user_id, profile_id, "alice"))
            .await
            .unwrap();
        assert!(output.created);

        let user = UserQueries::new(repo).by_profile_id(&profile_id).await.unwrap();
        assert_eq!(user.user_id, user_id);
        assert_eq!(user.username.as_str(), "alice");
    }

    #[tokio::test]
    async fn test_register_is_idempotent() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let use_case = RegisterUserUseCase::new(repo);
        let user_id = UserId::new();
        let profile_id = ProfileId::new();

        use_case
            .execute(input(user_id, profile_id, "alice"))
            .await
            .unwrap();
        let replay = use_case
            .execute(input(user_id, profile_id, "alice"))
            .await
            .unwrap();
        assert!(!replay.created);
    }

    #[tokio::test]
    async fn test_profile_cannot_be_bound_twice() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let use_case = RegisterUserUseCase::new(repo);
        let profile_id = ProfileId::new();

        use_case
            .execute(input(UserId::new(), profile_id, "alice"))
            .await
            .unwrap();
        let err = use_case
            .execute(input(UserId::new(), profile_id, "mallory"))
            .await
            .unwrap_err();
        assert!(matches!(err, UsersError::ProfileAlreadyBound));
        assert_eq!(err.status_code(), 409);
    }

    #[tokio::test]
    async fn test_invalid_username_rejected() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let use_case = RegisterUserUseCase::new(repo);

        let err = use_case
            .execute(input(UserId::new(), ProfileId::new(), "no spaces"))
            .await
            .unwrap_err();
        assert!(matches!(err, UsersError::Validation(_)));
    }
}

#[cfg(test)]
mod update_tests {
    use std::sync::Arc;

    use kernel::id::{ProfileId, UserId};

    use crate::application::{
        RegisterUserInput, RegisterUserUseCase, UpdateBannerInput, UpdateBannerUseCase,
        UpdateProfileInput, UpdateProfileUseCase, UserQueries,
    };
    use crate::error::UsersError;
    use crate::infra::memory::InMemoryUserRepository;

    async fn registered(repo: &Arc<InMemoryUserRepository>) -> UserId {
        let user_id = UserId::new();
        RegisterUserUseCase::new(repo.clone())
            .execute(RegisterUserInput {
                user_id,
                profile_id: ProfileId::new(),
                username: "bob_1".to_string(),
                profile_url: None,
            })
            .await
            .unwrap();
        user_id
    }

    #[tokio::test]
    async fn test_profile_update_applies() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let user_id = registered(&repo).await;

        let updated = UpdateProfileUseCase::new(repo.clone())
            .execute(UpdateProfileInput {
                user_id,
                username: "bob_renamed".to_string(),
                profile_url: Some("https://img.example.com/b.png".to_string()),
            })
            .await
            .unwrap();
        assert!(updated);

        let user = UserQueries::new(repo).by_username("bob_renamed").await.unwrap();
        assert_eq!(user.user_id, user_id);
        assert!(user.profile_url.is_some());
    }

    #[tokio::test]
    async fn test_profile_update_for_unknown_user_is_skipped() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let updated = UpdateProfileUseCase::new(repo)
            .execute(UpdateProfileInput {
                user_id: UserId::new(),
                username: "ghost".to_string(),
                profile_url: None,
            })
            .await
            .unwrap();
        assert!(!updated);
    }

    #[tokio::test]
    async fn test_banner_update_requires_user() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let err = UpdateBannerUseCase::new(repo)
            .execute(UpdateBannerInput {
                user_id: UserId::new(),
                banner_url: Some("https://img.example.com/banner.png".to_string()),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, UsersError::UserNotFound));
    }

    #[tokio::test]
    async fn test_banner_set_and_clear() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let user_id = registered(&repo).await;
        let use_case = UpdateBannerUseCase::new(repo.clone());

        use_case
            .execute(UpdateBannerInput {
                user_id,
                banner_url: Some("https://img.example.com/banner.png".to_string()),
            })
            .await
            .unwrap();
        let queries = UserQueries::new(repo);
        assert!(queries.by_user_id(&user_id).await.unwrap().banner_url.is_some());

        use_case
            .execute(UpdateBannerInput {
                user_id,
                banner_url: None,
            })
            .await
            .unwrap();
        assert!(queries.by_user_id(&user_id).await.unwrap().banner_url.is_none());
    }
}

#[cfg(test)]
mod facade_tests {
    use std::sync::Arc;

    use kernel::acl::UsersFacade;
    use kernel::id::{ProfileId, UserId};

    use crate::application::users_facade::UsersFacadeImpl;
    use crate::application::{RegisterUserInput, RegisterUserUseCase};
    use crate::infra::memory::InMemoryUserRepository;

    #[tokio::test]
    async fn test_identity_lookups() {
        let repo = Arc::new(InMemoryUserRepository::new());
        let user_id = UserId::new();
        let profile_id = ProfileId::new();
        RegisterUserUseCase::new(repo.clone())
            .execute(RegisterUserInput {
                user_id,
                profile_id,
                username: "carol".to_string(),
                profile_url: None,
            })
            .await
            .unwrap();

        let facade = UsersFacadeImpl::new(repo);
        assert!(facade.exists(&user_id).await.unwrap());
        assert!(!facade.exists(&UserId::new()).await.unwrap());
        assert_eq!(facade.profile_id_of(&user_id).await.unwrap(), Some(profile_id));
        assert_eq!(facade.profile_id_of(&UserId::new()).await.unwrap(), None);
        assert_eq!(
            facade.user_id_of_profile(&profile_id).await.unwrap(),
            Some(user_id)
        );
    }

    #[tokio::test]
    async fn test_role_names() {
        let facade = UsersFacadeImpl::new(Arc::new(InMemoryUserRepository::new()));
        assert!(facade.role_name_valid("member").await.unwrap());
        assert!(facade.role_name_valid(" ADMIN ").await.unwrap());
        assert!(!facade.role_name_valid("superuser").await.unwrap());
    }
}
