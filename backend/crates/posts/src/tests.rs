//! Unit tests for the posts context

#[cfg(test)]
mod support {
    use std::sync::Arc;

    use kernel::acl::IdentityRef;
    use kernel::acl::fake::{FakeCommunities, FakeReactions, FakeSubscriptions, FakeUsers};
    use kernel::id::{CommunityId, ProfileId, UserId};
    use kernel::privacy::Privacy;

    use crate::application::{DeletePostUseCase, PublishPostInput, PublishPostUseCase};
    use crate::domain::value_objects::PostKind;
    use crate::infra::memory::InMemoryPostRepository;

    pub type Publish =
        PublishPostUseCase<InMemoryPostRepository, FakeCommunities, FakeUsers, FakeSubscriptions>;
    pub type Delete = DeletePostUseCase<
        InMemoryPostRepository,
        FakeCommunities,
        FakeUsers,
        FakeSubscriptions,
        FakeReactions,
    >;

    pub struct Harness {
        pub repo: Arc<InMemoryPostRepository>,
        pub communities: Arc<FakeCommunities>,
        pub users: Arc<FakeUsers>,
        pub subscriptions: Arc<FakeSubscriptions>,
        pub reactions: Arc<FakeReactions>,
    }

    impl Harness {
        pub fn new() -> Self {
            Self {
                repo: Arc::new(InMemoryPostRepository::new()),
                communities: Arc::new(FakeCommunities::default()),
                users: Arc::new(FakeUsers::default()),
                subscriptions: Arc::new(FakeSubscriptions::default()),
                reactions: Arc::new(FakeReactions::default()),
            }
        }

        pub fn user(&self) -> (UserId, ProfileId) {
            let user_id = UserId::new();
            let profile_id = ProfileId::new();
            self.users.insert(user_id, Some(profile_id));
            (user_id, profile_id)
        }

        pub fn community(&self, owner: IdentityRef) -> CommunityId {
            let community_id = CommunityId::new();
            self.communities
                .insert(community_id, owner, Privacy::Public);
            community_id
        }

        pub fn publish(&self) -> Publish {
            PublishPostUseCase::new(
                self.repo.clone(),
                self.communities.clone(),
                self.users.clone(),
                self.subscriptions.clone(),
            )
        }

        pub fn delete(&self) -> Delete {
            DeletePostUseCase::new(
                self.repo.clone(),
                self.communities.clone(),
                self.users.clone(),
                self.subscriptions.clone(),
                self.reactions.clone(),
            )
        }
    }

    pub fn post(community_id: CommunityId, author_id: UserId, kind: PostKind) -> PublishPostInput {
        PublishPostInput {
            community_id,
            author_id,
            content: "Release notes for this week".to_string(),
            images: vec!["https://cdn.example.com/notes.png".to_string()],
            kind,
        }
    }
}

#[cfg(test)]
mod publish_tests {
    use kernel::acl::IdentityRef;
    use kernel::id::{CommunityId, UserId};
    use kernel::role::CommunityRole;

    use super::support::{Harness, post};
    use crate::application::PostQueries;
    use crate::domain::policy::PostRule;
    use crate::domain::value_objects::PostKind;
    use crate::error::PostError;

    #[tokio::test]
    async fn test_member_publishes_message() {
        let h = Harness::new();
        let (owner, _) = h.user();
        let (member, _) = h.user();
        let community = h.community(IdentityRef::User(owner));
        h.subscriptions
            .grant(member, community, CommunityRole::Member);

        let output = h
            .publish()
            .execute(post(community, member, PostKind::Message))
            .await
            .unwrap();

        let stored = PostQueries::new(h.repo.clone())
            .by_id(&output.post_id)
            .await
            .unwrap();
        assert_eq!(stored.author_id, member);
        assert_eq!(stored.kind, PostKind::Message);
        assert_eq!(stored.images.len(), 1);
    }

    #[tokio::test]
    async fn test_member_cannot_publish_announcement() {
        let h = Harness::new();
        let (owner, _) = h.user();
        let (member, _) = h.user();
        let community = h.community(IdentityRef::User(owner));
        h.subscriptions
            .grant(member, community, CommunityRole::Member);

        let err = h
            .publish()
            .execute(post(community, member, PostKind::Announcement))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PostError::Forbidden(PostRule::AnnouncementRequiresPrivilege)
        ));
        assert_eq!(
            err.to_string(),
            "only community admins or owners can publish announcements"
        );
    }

    #[tokio::test]
    async fn test_admin_publishes_announcement() {
        let h = Harness::new();
        let (owner, _) = h.user();
        let (admin, _) = h.user();
        let community = h.community(IdentityRef::User(owner));
        h.subscriptions.grant(admin, community, CommunityRole::Admin);

        let result = h
            .publish()
            .execute(post(community, admin, PostKind::Announcement))
            .await;

        assert!(result.is_ok());
        // Privileged role skips the ownership lookup
        assert_eq!(h.users.profile_lookups(), 0);
    }

    #[tokio::test]
    async fn test_non_member_is_forbidden() {
        let h = Harness::new();
        let (owner, _) = h.user();
        let (outsider, _) = h.user();
        let community = h.community(IdentityRef::User(owner));

        let err = h
            .publish()
            .execute(post(community, outsider, PostKind::Message))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "only members/owners can publish");
        assert_eq!(err.status_code(), 403);
    }

    #[tokio::test]
    async fn test_owner_recorded_under_profile_id_falls_back() {
        let h = Harness::new();
        let (owner, owner_profile) = h.user();
        let community = h.community(IdentityRef::Profile(owner_profile));

        for kind in [PostKind::Message, PostKind::Announcement] {
            h.publish()
                .execute(post(community, owner, kind))
                .await
                .unwrap();
        }
        // Fallback result is never persisted as a subscription
        assert!(h.subscriptions.is_empty());
    }

    #[tokio::test]
    async fn test_unrelated_identity_pair_is_forbidden() {
        let h = Harness::new();
        let (_, owner_profile) = h.user();
        let (stranger, _) = h.user();
        let community = h.community(IdentityRef::Profile(owner_profile));

        let err = h
            .publish()
            .execute(post(community, stranger, PostKind::Message))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PostError::Forbidden(PostRule::PublishRequiresMembership)
        ));
    }

    #[tokio::test]
    async fn test_member_owner_is_upgraded_for_announcements() {
        let h = Harness::new();
        let (owner, owner_profile) = h.user();
        let community = h.community(IdentityRef::Profile(owner_profile));
        h.subscriptions.grant(owner, community, CommunityRole::Member);

        let result = h
            .publish()
            .execute(post(community, owner, PostKind::Announcement))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_existence_and_validation_errors() {
        let h = Harness::new();
        let (owner, _) = h.user();
        let community = h.community(IdentityRef::User(owner));

        let err = h
            .publish()
            .execute(post(CommunityId::new(), owner, PostKind::Message))
            .await
            .unwrap_err();
        assert!(matches!(err, PostError::CommunityNotFound));

        let err = h
            .publish()
            .execute(post(community, UserId::new(), PostKind::Message))
            .await
            .unwrap_err();
        assert!(matches!(err, PostError::AuthorNotFound));

        let mut blank = post(community, owner, PostKind::Message);
        blank.content = "   ".to_string();
        let err = h.publish().execute(blank).await.unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[tokio::test]
    async fn test_facade_outage_is_internal_error() {
        let h = Harness::new();
        let (owner, _) = h.user();
        let community = h.community(IdentityRef::User(owner));
        h.subscriptions.fail_all();

        let err = h
            .publish()
            .execute(post(community, owner, PostKind::Message))
            .await
            .unwrap_err();

        assert!(matches!(err, PostError::Facade(_)));
        assert_eq!(err.status_code(), 500);
    }
}

#[cfg(test)]
mod delete_tests {
    use kernel::acl::IdentityRef;
    use kernel::id::PostId;
    use kernel::role::CommunityRole;

    use super::support::{Harness, post};
    use crate::application::DeletePostInput;
    use crate::domain::policy::PostRule;
    use crate::domain::repository::PostRepository;
    use crate::domain::value_objects::PostKind;
    use crate::error::PostError;

    #[tokio::test]
    async fn test_admin_deletes_and_reactions_are_cleared() {
        let h = Harness::new();
        let (owner, _) = h.user();
        let (member, _) = h.user();
        let (admin, _) = h.user();
        let community = h.community(IdentityRef::User(owner));
        h.subscriptions
            .grant(member, community, CommunityRole::Member);
        h.subscriptions.grant(admin, community, CommunityRole::Admin);
        let published = h
            .publish()
            .execute(post(community, member, PostKind::Message))
            .await
            .unwrap();

        let outcome = h
            .delete()
            .execute(DeletePostInput {
                post_id: published.post_id,
                requested_by: admin,
            })
            .await
            .unwrap();

        assert!(!outcome.compensation_pending());
        assert_eq!(*outcome.value(), published.post_id);
        assert!(!h.repo.exists_by_id(&published.post_id).await.unwrap());
        assert_eq!(h.reactions.cleared(), vec![published.post_id]);
    }

    #[tokio::test]
    async fn test_author_without_privilege_cannot_delete() {
        let h = Harness::new();
        let (owner, _) = h.user();
        let (member, _) = h.user();
        let community = h.community(IdentityRef::User(owner));
        h.subscriptions
            .grant(member, community, CommunityRole::Member);
        let published = h
            .publish()
            .execute(post(community, member, PostKind::Message))
            .await
            .unwrap();

        let err = h
            .delete()
            .execute(DeletePostInput {
                post_id: published.post_id,
                requested_by: member,
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PostError::Forbidden(PostRule::DeleteRequiresPrivilege)
        ));
        assert!(h.repo.exists_by_id(&published.post_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_owner_deletes_via_fallback() {
        let h = Harness::new();
        let (owner, owner_profile) = h.user();
        let (member, _) = h.user();
        let community = h.community(IdentityRef::Profile(owner_profile));
        h.subscriptions
            .grant(member, community, CommunityRole::Member);
        let published = h
            .publish()
            .execute(post(community, member, PostKind::Message))
            .await
            .unwrap();

        let outcome = h
            .delete()
            .execute(DeletePostInput {
                post_id: published.post_id,
                requested_by: owner,
            })
            .await
            .unwrap();

        assert_eq!(outcome.into_value(), published.post_id);
    }

    #[tokio::test]
    async fn test_reaction_cleanup_failure_is_pending() {
        let h = Harness::new();
        let (owner, _) = h.user();
        let community = h.community(IdentityRef::User(owner));
        let published = h
            .publish()
            .execute(post(community, owner, PostKind::Message))
            .await
            .unwrap();
        h.reactions.fail_all();

        let outcome = h
            .delete()
            .execute(DeletePostInput {
                post_id: published.post_id,
                requested_by: owner,
            })
            .await
            .unwrap();

        assert!(outcome.compensation_pending());
        assert_eq!(outcome.pending()[0].action, "reactions.remove_all_for_posts");
        assert!(!h.repo.exists_by_id(&published.post_id).await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_post() {
        let h = Harness::new();
        let (owner, _) = h.user();

        let err = h
            .delete()
            .execute(DeletePostInput {
                post_id: PostId::new(),
                requested_by: owner,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, PostError::PostNotFound));
        assert_eq!(err.status_code(), 404);
    }
}

#[cfg(test)]
mod facade_tests {
    use kernel::acl::{IdentityRef, PostLifecycle, PostsFacade};
    use kernel::page::Page;

    use super::support::{Harness, post};
    use crate::application::PostQueries;
    use crate::application::posts_facade::PostsFacadeImpl;
    use crate::domain::value_objects::PostKind;

    #[tokio::test]
    async fn test_posts_for_communities_newest_first() {
        let h = Harness::new();
        let (owner, _) = h.user();
        let first = h.community(IdentityRef::User(owner));
        let second = h.community(IdentityRef::User(owner));
        let unrelated = h.community(IdentityRef::User(owner));

        let mut published = Vec::new();
        for community in [first, second, unrelated, first] {
            published.push(
                h.publish()
                    .execute(post(community, owner, PostKind::Message))
                    .await
                    .unwrap()
                    .post_id,
            );
        }

        let facade = PostsFacadeImpl::new(h.repo.clone());
        let feed = facade
            .posts_for_communities(&[first, second], Page::first())
            .await
            .unwrap();

        assert_eq!(feed.len(), 3);
        assert!(feed.windows(2).all(|w| w[0].created_at >= w[1].created_at));
        assert!(!feed.iter().any(|p| p.post_id == published[2]));
        assert!(feed.iter().all(|p| p.kind == "message"));
        assert!(
            facade
                .posts_for_communities(&[], Page::first())
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_delete_all_for_community() {
        let h = Harness::new();
        let (owner, _) = h.user();
        let community = h.community(IdentityRef::User(owner));
        let kept = h.community(IdentityRef::User(owner));
        for target in [community, community, kept] {
            h.publish()
                .execute(post(target, owner, PostKind::Message))
                .await
                .unwrap();
        }

        let facade = PostsFacadeImpl::new(h.repo.clone());
        let removed = facade.delete_all_for_community(&community).await.unwrap();

        assert_eq!(removed.len(), 2);
        let queries = PostQueries::new(h.repo.clone());
        assert!(
            queries
                .in_community(&community, Page::first())
                .await
                .unwrap()
                .is_empty()
        );
        assert_eq!(queries.in_community(&kept, Page::first()).await.unwrap().len(), 1);
        assert!(!facade.exists(&removed[0]).await.unwrap());
    }
}
