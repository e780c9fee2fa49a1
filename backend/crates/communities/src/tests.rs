//! Unit tests for the communities context

#[cfg(test)]
mod support {
    use std::sync::Arc;

    use kernel::acl::fake::{FakePosts, FakeReactions, FakeSubscriptions, FakeUsers};
    use kernel::id::{ProfileId, UserId};

    use crate::application::config::CommunitiesConfig;
    use crate::infra::memory::InMemoryCommunityRepository;

    pub struct Harness {
        pub repo: Arc<InMemoryCommunityRepository>,
        pub users: Arc<FakeUsers>,
        pub subscriptions: Arc<FakeSubscriptions>,
        pub posts: Arc<FakePosts>,
        pub reactions: Arc<FakeReactions>,
        pub config: Arc<CommunitiesConfig>,
    }

    impl Harness {
        pub fn new(config: CommunitiesConfig) -> Self {
            Self {
                repo: Arc::new(InMemoryCommunityRepository::new()),
                users: Arc::new(FakeUsers::default()),
                subscriptions: Arc::new(FakeSubscriptions::default()),
                posts: Arc::new(FakePosts::default()),
                reactions: Arc::new(FakeReactions::default()),
                config: Arc::new(config),
            }
        }

        pub fn user(&self) -> (UserId, ProfileId) {
            let user_id = UserId::new();
            let profile_id = ProfileId::new();
            self.users.insert(user_id, Some(profile_id));
            (user_id, profile_id)
        }
    }

    pub const DESCRIPTION: &str = "A community for systems programmers.";
}

#[cfg(test)]
mod create_tests {
    use kernel::acl::{IdentityRef, SubscriptionsFacade};
    use kernel::id::UserId;
    use kernel::privacy::Privacy;
    use kernel::role::CommunityRole;

    use super::support::{DESCRIPTION, Harness};
    use crate::application::config::{CommunitiesConfig, OwnerIdentity};
    use crate::application::{CommunityQueries, CreateCommunityInput, CreateCommunityUseCase};
    use crate::error::CommunityError;

    fn input(owner_id: UserId, privacy: Privacy) -> CreateCommunityInput {
        CreateCommunityInput {
            owner_id,
            name: "Rustaceans".to_string(),
            description: DESCRIPTION.to_string(),
            icon_url: None,
            banner_url: Some("https://cdn.example.com/banner.png".to_string()),
            privacy,
        }
    }

    fn use_case(
        h: &Harness,
    ) -> CreateCommunityUseCase<
        crate::InMemoryCommunityRepository,
        kernel::acl::fake::FakeUsers,
        kernel::acl::fake::FakeSubscriptions,
    > {
        CreateCommunityUseCase::new(
            h.repo.clone(),
            h.users.clone(),
            h.subscriptions.clone(),
            h.config.clone(),
        )
    }

    #[tokio::test]
    async fn test_create_subscribes_owner() {
        let h = Harness::new(CommunitiesConfig::default());
        let (owner, _) = h.user();

        let outcome = use_case(&h).execute(input(owner, Privacy::Public)).await.unwrap();
        assert!(!outcome.compensation_pending());

        let community_id = outcome.into_value();
        let community = CommunityQueries::new(h.repo.clone())
            .by_id(&community_id)
            .await
            .unwrap();
        assert_eq!(community.owner, IdentityRef::User(owner));
        assert_eq!(
            h.subscriptions.role_of(&owner, &community_id).await.unwrap(),
            Some(CommunityRole::Owner)
        );
    }

    #[tokio::test]
    async fn test_create_records_profile_owner_when_configured() {
        let h = Harness::new(
            CommunitiesConfig::default().with_owner_identity(OwnerIdentity::Profile),
        );
        let (owner, profile) = h.user();

        let community_id = use_case(&h)
            .execute(input(owner, Privacy::Private))
            .await
            .unwrap()
            .into_value();
        let community = CommunityQueries::new(h.repo.clone())
            .by_id(&community_id)
            .await
            .unwrap();
        assert_eq!(community.owner, IdentityRef::Profile(profile));
        assert_eq!(community.privacy, Privacy::Private);
    }

    #[tokio::test]
    async fn test_create_reports_failed_owner_subscription() {
        let h = Harness::new(CommunitiesConfig::default());
        let (owner, _) = h.user();
        h.subscriptions.fail_all();

        let outcome = use_case(&h).execute(input(owner, Privacy::Public)).await.unwrap();
        assert!(outcome.compensation_pending());
        assert_eq!(
            outcome.pending()[0].action,
            "subscriptions.create_owner_subscription"
        );

        // The community itself is committed
        let community_id = outcome.into_value();
        assert!(CommunityQueries::new(h.repo.clone()).by_id(&community_id).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_requires_known_owner() {
        let h = Harness::new(CommunitiesConfig::default());
        let err = use_case(&h)
            .execute(input(UserId::new(), Privacy::Public))
            .await
            .unwrap_err();
        assert!(matches!(err, CommunityError::OwnerNotFound));
        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_create_validates_fields() {
        let h = Harness::new(CommunitiesConfig::default());
        let (owner, _) = h.user();
        let mut bad = input(owner, Privacy::Public);
        bad.description = "short".to_string();

        let err = use_case(&h).execute(bad).await.unwrap_err();
        assert!(matches!(err, CommunityError::Validation(_)));
    }
}

#[cfg(test)]
mod manage_tests {
    use chrono::Utc;
    use kernel::acl::PostSummary;
    use kernel::acl::{IdentityRef, PostsFacade};
    use kernel::id::{CommunityId, PostId, UserId};
    use kernel::page::Page;
    use kernel::privacy::Privacy;
    use kernel::role::CommunityRole;

    use super::support::{DESCRIPTION, Harness};
    use crate::application::config::CommunitiesConfig;
    use crate::application::{
        DeleteCommunityInput, DeleteCommunityUseCase, UpdateInfoInput, UpdateInfoUseCase,
        UpdatePrivacyInput, UpdatePrivacyUseCase,
    };
    use crate::domain::entities::Community;
    use crate::domain::policy::CommunityRule;
    use crate::domain::repository::CommunityRepository;
    use crate::domain::value_objects::{CommunityName, Description};
    use crate::error::CommunityError;

    async fn seed(h: &Harness, owner: IdentityRef, privacy: Privacy) -> CommunityId {
        let community = Community::new(
            owner,
            CommunityName::new("Gophers").unwrap(),
            Description::new(DESCRIPTION).unwrap(),
            None,
            None,
            privacy,
        );
        h.repo.create(&community).await.unwrap();
        community.community_id
    }

    fn post(community_id: CommunityId) -> PostSummary {
        PostSummary {
            post_id: PostId::new(),
            community_id,
            author_id: UserId::new(),
            kind: "message".to_string(),
            content: "hello".to_string(),
            images: vec![],
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_profile_owner_can_change_privacy() {
        let h = Harness::new(CommunitiesConfig::default());
        let (owner, profile) = h.user();
        let community_id = seed(&h, IdentityRef::Profile(profile), Privacy::Public).await;

        let updated = UpdatePrivacyUseCase::new(h.repo.clone(), h.users.clone())
            .execute(UpdatePrivacyInput {
                community_id,
                requested_by: owner,
                privacy: Privacy::Private,
            })
            .await
            .unwrap();
        assert_eq!(updated.privacy, Privacy::Private);
    }

    #[tokio::test]
    async fn test_non_owner_cannot_update_info() {
        let h = Harness::new(CommunitiesConfig::default());
        let (owner, _) = h.user();
        let (stranger, _) = h.user();
        let community_id = seed(&h, IdentityRef::User(owner), Privacy::Public).await;

        let err = UpdateInfoUseCase::new(h.repo.clone(), h.users.clone())
            .execute(UpdateInfoInput {
                community_id,
                requested_by: stranger,
                name: "Hijacked".to_string(),
                description: DESCRIPTION.to_string(),
                icon_url: None,
                banner_url: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CommunityError::Forbidden(CommunityRule::OwnerOnly)));
        assert_eq!(
            err.to_string(),
            "only the community owner can manage the community"
        );
    }

    #[tokio::test]
    async fn test_delete_cascades_best_effort() {
        let h = Harness::new(CommunitiesConfig::default());
        let (owner, _) = h.user();
        let community_id = seed(&h, IdentityRef::User(owner), Privacy::Public).await;
        h.subscriptions.grant(owner, community_id, CommunityRole::Owner);
        let first = post(community_id);
        h.posts.insert(first.clone());
        h.posts.insert(post(community_id));

        let outcome = DeleteCommunityUseCase::new(
            h.repo.clone(),
            h.users.clone(),
            h.subscriptions.clone(),
            h.posts.clone(),
            h.reactions.clone(),
        )
        .execute(DeleteCommunityInput {
            community_id,
            requested_by: owner,
        })
        .await
        .unwrap();

        assert!(!outcome.compensation_pending());
        assert!(!h.repo.exists_by_id(&community_id).await.unwrap());
        assert!(h.subscriptions.is_empty());
        assert!(!h.posts.exists(&first.post_id).await.unwrap());
        assert_eq!(h.reactions.cleared().len(), 2);
        assert!(
            h.posts
                .posts_for_communities(&[community_id], Page::first())
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_delete_keeps_going_when_posts_context_fails() {
        let h = Harness::new(CommunitiesConfig::default());
        let (owner, _) = h.user();
        let community_id = seed(&h, IdentityRef::User(owner), Privacy::Public).await;
        h.posts.fail_all();

        let outcome = DeleteCommunityUseCase::new(
            h.repo.clone(),
            h.users.clone(),
            h.subscriptions.clone(),
            h.posts.clone(),
            h.reactions.clone(),
        )
        .execute(DeleteCommunityInput {
            community_id,
            requested_by: owner,
        })
        .await
        .unwrap();

        assert!(outcome.compensation_pending());
        assert_eq!(outcome.pending().len(), 1);
        assert_eq!(outcome.pending()[0].action, "posts.delete_all_for_community");
        assert!(h.reactions.cleared().is_empty());
    }

    #[tokio::test]
    async fn test_delete_by_non_owner_is_forbidden_and_mutates_nothing() {
        let h = Harness::new(CommunitiesConfig::default());
        let (owner, _) = h.user();
        let (admin, _) = h.user();
        let community_id = seed(&h, IdentityRef::User(owner), Privacy::Private).await;
        h.subscriptions.grant(admin, community_id, CommunityRole::Admin);

        let err = DeleteCommunityUseCase::new(
            h.repo.clone(),
            h.users.clone(),
            h.subscriptions.clone(),
            h.posts.clone(),
            h.reactions.clone(),
        )
        .execute(DeleteCommunityInput {
            community_id,
            requested_by: admin,
        })
        .await
        .unwrap_err();

        assert_eq!(err.status_code(), 403);
        assert!(h.repo.exists_by_id(&community_id).await.unwrap());
        assert_eq!(h.subscriptions.len(), 1);
    }
}

#[cfg(test)]
mod facade_tests {
    use kernel::acl::{CommunitiesFacade, IdentityRef};
    use kernel::id::{CommunityId, ProfileId, UserId};
    use kernel::privacy::Privacy;

    use super::support::{DESCRIPTION, Harness};
    use crate::application::communities_facade::CommunitiesFacadeImpl;
    use crate::application::config::CommunitiesConfig;
    use crate::domain::entities::Community;
    use crate::domain::repository::CommunityRepository;
    use crate::domain::value_objects::{CommunityName, Description};

    #[tokio::test]
    async fn test_facade_answers() {
        let h = Harness::new(CommunitiesConfig::default());
        let profile = ProfileId::new();
        let community = Community::new(
            IdentityRef::Profile(profile),
            CommunityName::new("Zig Club").unwrap(),
            Description::new(DESCRIPTION).unwrap(),
            None,
            None,
            Privacy::Private,
        );
        h.repo.create(&community).await.unwrap();
        let facade = CommunitiesFacadeImpl::new(h.repo.clone());
        let id = community.community_id;

        assert!(facade.exists(&id).await.unwrap());
        assert_eq!(facade.privacy(&id).await.unwrap(), Privacy::Private);
        assert_eq!(facade.owner_id(&id).await.unwrap(), IdentityRef::Profile(profile));
        assert!(facade.is_owner(&id, IdentityRef::Profile(profile)).await.unwrap());
        assert!(
            !facade
                .is_owner(&id, IdentityRef::User(UserId::new()))
                .await
                .unwrap()
        );

        let missing = CommunityId::new();
        assert!(!facade.exists(&missing).await.unwrap());
        assert_eq!(facade.privacy(&missing).await.unwrap_err().status_code(), 404);
        assert!(!facade.is_owner(&missing, IdentityRef::Profile(profile)).await.unwrap());
    }
}

#[cfg(test)]
mod reconcile_tests {
    use kernel::acl::{IdentityRef, SubscriptionsFacade};
    use kernel::id::{CommunityId, ProfileId};
    use kernel::privacy::Privacy;
    use kernel::role::CommunityRole;

    use super::support::{DESCRIPTION, Harness};
    use crate::application::config::CommunitiesConfig;
    use crate::application::{ReconcileOwnersUseCase, ReconcileReport};
    use crate::domain::entities::Community;
    use crate::domain::repository::CommunityRepository;
    use crate::domain::value_objects::{CommunityName, Description};

    async fn seed(h: &Harness, owner: IdentityRef, name: &str) -> CommunityId {
        let community = Community::new(
            owner,
            CommunityName::new(name).unwrap(),
            Description::new(DESCRIPTION).unwrap(),
            None,
            None,
            Privacy::Public,
        );
        h.repo.create(&community).await.unwrap();
        community.community_id
    }

    #[tokio::test]
    async fn test_missing_owner_subscriptions_are_restored() {
        // Batch of 2 forces several pages
        let h = Harness::new(CommunitiesConfig {
            reconcile_batch_size: 2,
            ..CommunitiesConfig::development()
        });
        let (alice, _) = h.user();
        let (bob, bob_profile) = h.user();

        let healthy = seed(&h, IdentityRef::User(alice), "Healthy").await;
        h.subscriptions.grant(alice, healthy, CommunityRole::Owner);
        let broken_user = seed(&h, IdentityRef::User(alice), "Broken one").await;
        let broken_profile = seed(&h, IdentityRef::Profile(bob_profile), "Broken two").await;
        seed(&h, IdentityRef::Profile(ProfileId::new()), "Orphaned").await;

        let report = ReconcileOwnersUseCase::new(
            h.repo.clone(),
            h.users.clone(),
            h.subscriptions.clone(),
            h.config.clone(),
        )
        .execute()
        .await
        .unwrap();

        assert_eq!(
            report,
            ReconcileReport {
                scanned: 4,
                repaired: 2,
                failed: 1,
            }
        );
        assert_eq!(
            h.subscriptions.role_of(&alice, &broken_user).await.unwrap(),
            Some(CommunityRole::Owner)
        );
        assert_eq!(
            h.subscriptions.role_of(&bob, &broken_profile).await.unwrap(),
            Some(CommunityRole::Owner)
        );
    }

    #[tokio::test]
    async fn test_owner_holding_member_row_is_raised_to_owner() {
        let h = Harness::new(CommunitiesConfig::development());
        let (owner, _) = h.user();
        let community = seed(&h, IdentityRef::User(owner), "Self joined").await;
        h.subscriptions.grant(owner, community, CommunityRole::Member);

        let use_case = ReconcileOwnersUseCase::new(
            h.repo.clone(),
            h.users.clone(),
            h.subscriptions.clone(),
            h.config.clone(),
        );
        let report = use_case.execute().await.unwrap();

        assert_eq!(
            report,
            ReconcileReport {
                scanned: 1,
                repaired: 1,
                failed: 0,
            }
        );
        assert_eq!(
            h.subscriptions.role_of(&owner, &community).await.unwrap(),
            Some(CommunityRole::Owner)
        );
        assert_eq!(h.subscriptions.len(), 1);

        let rerun = use_case.execute().await.unwrap();
        assert_eq!(rerun.repaired, 0);
    }
}
