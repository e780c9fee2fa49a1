//! Unit tests for the reactions context

#[cfg(test)]
mod support {
    use std::sync::Arc;

    use chrono::Utc;
    use kernel::acl::PostSummary;
    use kernel::acl::fake::{FakePosts, FakeUsers};
    use kernel::id::{CommunityId, PostId, UserId};

    use crate::application::{AddReactionInput, AddReactionUseCase, RemoveReactionUseCase};
    use crate::infra::memory::InMemoryReactionRepository;

    pub struct Harness {
        pub repo: Arc<InMemoryReactionRepository>,
        pub posts: Arc<FakePosts>,
        pub users: Arc<FakeUsers>,
    }

    impl Harness {
        pub fn new() -> Self {
            Self {
                repo: Arc::new(InMemoryReactionRepository::new()),
                posts: Arc::new(FakePosts::default()),
                users: Arc::new(FakeUsers::default()),
            }
        }

        pub fn user(&self) -> UserId {
            let user_id = UserId::new();
            self.users.insert(user_id, None);
            user_id
        }

        pub fn post(&self, author_id: UserId) -> PostId {
            let post_id = PostId::new();
            self.posts.insert(PostSummary {
                post_id,
                community_id: CommunityId::new(),
                author_id,
                kind: "message".to_string(),
                content: "hello".to_string(),
                images: Vec::new(),
                created_at: Utc::now(),
            });
            post_id
        }

        pub fn add(&self) -> AddReactionUseCase<InMemoryReactionRepository, FakePosts, FakeUsers> {
            AddReactionUseCase::new(self.repo.clone(), self.posts.clone(), self.users.clone())
        }

        pub fn remove(&self) -> RemoveReactionUseCase<InMemoryReactionRepository> {
            RemoveReactionUseCase::new(self.repo.clone())
        }
    }

    pub fn react(post_id: PostId, user_id: UserId, kind: &str) -> AddReactionInput {
        AddReactionInput {
            post_id,
            user_id,
            kind: kind.to_string(),
        }
    }
}

#[cfg(test)]
mod add_tests {
    use kernel::id::{PostId, UserId};

    use super::support::{Harness, react};
    use crate::application::ReactionQueries;
    use crate::domain::value_objects::ReactionType;
    use crate::error::ReactionError;

    #[tokio::test]
    async fn test_second_reaction_replaces_type() {
        let h = Harness::new();
        let user = h.user();
        let post = h.post(user);

        let first = h.add().execute(react(post, user, "like")).await.unwrap();
        let second = h.add().execute(react(post, user, "Love")).await.unwrap();

        assert!(first.created);
        assert!(!second.created);
        assert_eq!(first.reaction_id, second.reaction_id);

        let stored = ReactionQueries::new(h.repo.clone())
            .of_user(&post, &user)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.kind, ReactionType::Love);
    }

    #[tokio::test]
    async fn test_counts_per_type() {
        let h = Harness::new();
        let author = h.user();
        let post = h.post(author);
        for kind in ["like", "like", "wow"] {
            let user = h.user();
            h.add().execute(react(post, user, kind)).await.unwrap();
        }

        let counts = ReactionQueries::new(h.repo.clone())
            .counts(&post)
            .await
            .unwrap();

        assert_eq!(counts.total, 3);
        assert_eq!(counts.of(ReactionType::Like), 2);
        assert_eq!(counts.of(ReactionType::Wow), 1);
        assert_eq!(counts.of(ReactionType::Angry), 0);
    }

    #[tokio::test]
    async fn test_rejects_unknown_inputs() {
        let h = Harness::new();
        let user = h.user();
        let post = h.post(user);

        let err = h.add().execute(react(post, user, "clap")).await.unwrap_err();
        assert!(matches!(err, ReactionError::Validation(_)));

        let err = h
            .add()
            .execute(react(PostId::new(), user, "like"))
            .await
            .unwrap_err();
        assert!(matches!(err, ReactionError::PostNotFound));

        let err = h
            .add()
            .execute(react(post, UserId::new(), "like"))
            .await
            .unwrap_err();
        assert!(matches!(err, ReactionError::UserNotFound));
    }

    #[tokio::test]
    async fn test_posts_outage_is_internal_error() {
        let h = Harness::new();
        let user = h.user();
        let post = h.post(user);
        h.posts.fail_all();

        let err = h.add().execute(react(post, user, "sad")).await.unwrap_err();

        assert_eq!(err.status_code(), 500);
    }
}

#[cfg(test)]
mod remove_tests {
    use kernel::acl::ReactionsFacade;
    use kernel::id::ReactionId;
    use kernel::page::Page;

    use super::support::{Harness, react};
    use crate::application::{ReactionQueries, RemoveReactionInput};
    use crate::application::reactions_facade::ReactionsFacadeImpl;
    use crate::domain::policy::ReactionRule;
    use crate::error::ReactionError;

    #[tokio::test]
    async fn test_only_author_removes() {
        let h = Harness::new();
        let author = h.user();
        let other = h.user();
        let post = h.post(author);
        let added = h.add().execute(react(post, author, "haha")).await.unwrap();

        let err = h
            .remove()
            .execute(RemoveReactionInput {
                reaction_id: added.reaction_id,
                requested_by: other,
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ReactionError::Forbidden(ReactionRule::RemovalRequiresAuthor)
        ));
        assert_eq!(err.to_string(), "only the reaction author can remove it");

        h.remove()
            .execute(RemoveReactionInput {
                reaction_id: added.reaction_id,
                requested_by: author,
            })
            .await
            .unwrap();

        let err = h
            .remove()
            .execute(RemoveReactionInput {
                reaction_id: added.reaction_id,
                requested_by: author,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ReactionError::ReactionNotFound));
    }

    #[tokio::test]
    async fn test_unknown_reaction() {
        let h = Harness::new();
        let user = h.user();

        let err = h
            .remove()
            .execute(RemoveReactionInput {
                reaction_id: ReactionId::new(),
                requested_by: user,
            })
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), 404);
    }

    #[tokio::test]
    async fn test_facade_clears_only_given_posts() {
        let h = Harness::new();
        let user = h.user();
        let cleared = h.post(user);
        let kept = h.post(user);
        h.add().execute(react(cleared, user, "like")).await.unwrap();
        h.add().execute(react(kept, user, "like")).await.unwrap();

        let facade = ReactionsFacadeImpl::new(h.repo.clone());
        assert_eq!(facade.remove_all_for_posts(&[cleared]).await.unwrap(), 1);
        assert_eq!(facade.remove_all_for_posts(&[]).await.unwrap(), 0);

        let queries = ReactionQueries::new(h.repo.clone());
        assert!(queries.of_post(&cleared, Page::first()).await.unwrap().is_empty());
        assert_eq!(queries.of_post(&kept, Page::first()).await.unwrap().len(), 1);
    }
}
