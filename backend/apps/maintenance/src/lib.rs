//! Context wiring
//!
//! Builds every bounded context from its repositories and hands the
//! facades to the contexts that depend on them. Both the Postgres-backed
//! binary and the in-memory end-to-end tests go through [`Contexts`].

use std::sync::Arc;

use communities::application::{
    CommunityQueries, CreateCommunityUseCase, DeleteCommunityUseCase, ReconcileOwnersUseCase,
    UpdateInfoUseCase, UpdatePrivacyUseCase,
};
use communities::domain::CommunityRepository;
use communities::{
    CommunitiesConfig, CommunitiesFacadeImpl, InMemoryCommunityRepository, PgCommunityRepository,
};
use feed::GetUserFeedUseCase;
use posts::application::{DeletePostUseCase, PostQueries, PublishPostUseCase};
use posts::domain::PostRepository;
use posts::{InMemoryPostRepository, PgPostRepository, PostsFacadeImpl};
use reactions::application::{AddReactionUseCase, ReactionQueries, RemoveReactionUseCase};
use reactions::domain::ReactionRepository;
use reactions::{InMemoryReactionRepository, PgReactionRepository, ReactionsFacadeImpl};
use sqlx::PgPool;
use subscriptions::application::{SubscribeUseCase, SubscriptionQueries, UnsubscribeUseCase};
use subscriptions::domain::SubscriptionRepository;
use subscriptions::{
    InMemorySubscriptionRepository, PgSubscriptionRepository, SubscriptionsFacadeImpl,
};
use users::application::{
    RegisterUserUseCase, UpdateBannerUseCase, UpdateProfileUseCase, UserQueries,
};
use users::domain::UserRepository;
use users::{InMemoryUserRepository, PgUserRepository, UsersFacadeImpl};

pub struct Contexts<UR, CR, SR, PR, XR>
where
    UR: UserRepository,
    CR: CommunityRepository,
    SR: SubscriptionRepository,
    PR: PostRepository,
    XR: ReactionRepository,
{
    pub user_repo: Arc<UR>,
    pub community_repo: Arc<CR>,
    pub subscription_repo: Arc<SR>,
    pub post_repo: Arc<PR>,
    pub reaction_repo: Arc<XR>,
    pub users: Arc<UsersFacadeImpl<UR>>,
    pub communities: Arc<CommunitiesFacadeImpl<CR>>,
    pub subscriptions: Arc<SubscriptionsFacadeImpl<SR>>,
    pub posts: Arc<PostsFacadeImpl<PR>>,
    pub reactions: Arc<ReactionsFacadeImpl<XR>>,
    pub config: Arc<CommunitiesConfig>,
}

pub type InMemoryContexts = Contexts<
    InMemoryUserRepository,
    InMemoryCommunityRepository,
    InMemorySubscriptionRepository,
    InMemoryPostRepository,
    InMemoryReactionRepository,
>;

pub type PgContexts = Contexts<
    PgUserRepository,
    PgCommunityRepository,
    PgSubscriptionRepository,
    PgPostRepository,
    PgReactionRepository,
>;

impl InMemoryContexts {
    pub fn in_memory(config: CommunitiesConfig) -> Self {
        Self::from_repositories(
            Arc::new(InMemoryUserRepository::new()),
            Arc::new(InMemoryCommunityRepository::new()),
            Arc::new(InMemorySubscriptionRepository::new()),
            Arc::new(InMemoryPostRepository::new()),
            Arc::new(InMemoryReactionRepository::new()),
            config,
        )
    }
}

impl PgContexts {
    pub fn postgres(pool: PgPool, config: CommunitiesConfig) -> Self {
        Self::from_repositories(
            Arc::new(PgUserRepository::new(pool.clone())),
            Arc::new(PgCommunityRepository::new(pool.clone())),
            Arc::new(PgSubscriptionRepository::new(pool.clone())),
            Arc::new(PgPostRepository::new(pool.clone())),
            Arc::new(PgReactionRepository::new(pool)),
            config,
        )
    }
}

impl<UR, CR, SR, PR, XR> Contexts<UR, CR, SR, PR, XR>
where
    UR: UserRepository + Send + Sync,
    CR: CommunityRepository + Send + Sync,
    SR: SubscriptionRepository + Send + Sync,
    PR: PostRepository + Send + Sync,
    XR: ReactionRepository + Send + Sync,
{
    pub fn from_repositories(
        user_repo: Arc<UR>,
        community_repo: Arc<CR>,
        subscription_repo: Arc<SR>,
        post_repo: Arc<PR>,
        reaction_repo: Arc<XR>,
        config: CommunitiesConfig,
    ) -> Self {
        Self {
            users: Arc::new(UsersFacadeImpl::new(user_repo.clone())),
            communities: Arc::new(CommunitiesFacadeImpl::new(community_repo.clone())),
            subscriptions: Arc::new(SubscriptionsFacadeImpl::new(subscription_repo.clone())),
            posts: Arc::new(PostsFacadeImpl::new(post_repo.clone())),
            reactions: Arc::new(ReactionsFacadeImpl::new(reaction_repo.clone())),
            user_repo,
            community_repo,
            subscription_repo,
            post_repo,
            reaction_repo,
            config: Arc::new(config),
        }
    }

    // users

    pub fn register_user(&self) -> RegisterUserUseCase<UR> {
        RegisterUserUseCase::new(self.user_repo.clone())
    }

    pub fn update_profile(&self) -> UpdateProfileUseCase<UR> {
        UpdateProfileUseCase::new(self.user_repo.clone())
    }

    pub fn update_banner(&self) -> UpdateBannerUseCase<UR> {
        UpdateBannerUseCase::new(self.user_repo.clone())
    }

    pub fn user_queries(&self) -> UserQueries<UR> {
        UserQueries::new(self.user_repo.clone())
    }

    // communities

    pub fn create_community(
        &self,
    ) -> CreateCommunityUseCase<CR, UsersFacadeImpl<UR>, SubscriptionsFacadeImpl<SR>> {
        CreateCommunityUseCase::new(
            self.community_repo.clone(),
            self.users.clone(),
            self.subscriptions.clone(),
            self.config.clone(),
        )
    }

    pub fn delete_community(
        &self,
    ) -> DeleteCommunityUseCase<
        CR,
        UsersFacadeImpl<UR>,
        SubscriptionsFacadeImpl<SR>,
        PostsFacadeImpl<PR>,
        ReactionsFacadeImpl<XR>,
    > {
        DeleteCommunityUseCase::new(
            self.community_repo.clone(),
            self.users.clone(),
            self.subscriptions.clone(),
            self.posts.clone(),
            self.reactions.clone(),
        )
    }

    pub fn update_privacy(&self) -> UpdatePrivacyUseCase<CR, UsersFacadeImpl<UR>> {
        UpdatePrivacyUseCase::new(self.community_repo.clone(), self.users.clone())
    }

    pub fn update_info(&self) -> UpdateInfoUseCase<CR, UsersFacadeImpl<UR>> {
        UpdateInfoUseCase::new(self.community_repo.clone(), self.users.clone())
    }

    pub fn community_queries(&self) -> CommunityQueries<CR> {
        CommunityQueries::new(self.community_repo.clone())
    }

    pub fn reconcile_owners(
        &self,
    ) -> ReconcileOwnersUseCase<CR, UsersFacadeImpl<UR>, SubscriptionsFacadeImpl<SR>> {
        ReconcileOwnersUseCase::new(
            self.community_repo.clone(),
            self.users.clone(),
            self.subscriptions.clone(),
            self.config.clone(),
        )
    }

    // subscriptions

    pub fn subscribe(
        &self,
    ) -> SubscribeUseCase<SR, CommunitiesFacadeImpl<CR>, UsersFacadeImpl<UR>> {
        SubscribeUseCase::new(
            self.subscription_repo.clone(),
            self.communities.clone(),
            self.users.clone(),
        )
    }

    pub fn unsubscribe(
        &self,
    ) -> UnsubscribeUseCase<SR, CommunitiesFacadeImpl<CR>, UsersFacadeImpl<UR>> {
        UnsubscribeUseCase::new(
            self.subscription_repo.clone(),
            self.communities.clone(),
            self.users.clone(),
        )
    }

    pub fn subscription_queries(&self) -> SubscriptionQueries<SR> {
        SubscriptionQueries::new(self.subscription_repo.clone())
    }

    // posts

    pub fn publish_post(
        &self,
    ) -> PublishPostUseCase<
        PR,
        CommunitiesFacadeImpl<CR>,
        UsersFacadeImpl<UR>,
        SubscriptionsFacadeImpl<SR>,
    > {
        PublishPostUseCase::new(
            self.post_repo.clone(),
            self.communities.clone(),
            self.users.clone(),
            self.subscriptions.clone(),
        )
    }

    pub fn delete_post(
        &self,
    ) -> DeletePostUseCase<
        PR,
        CommunitiesFacadeImpl<CR>,
        UsersFacadeImpl<UR>,
        SubscriptionsFacadeImpl<SR>,
        ReactionsFacadeImpl<XR>,
    > {
        DeletePostUseCase::new(
            self.post_repo.clone(),
            self.communities.clone(),
            self.users.clone(),
            self.subscriptions.clone(),
            self.reactions.clone(),
        )
    }

    pub fn post_queries(&self) -> PostQueries<PR> {
        PostQueries::new(self.post_repo.clone())
    }

    // reactions

    pub fn add_reaction(
        &self,
    ) -> AddReactionUseCase<XR, PostsFacadeImpl<PR>, UsersFacadeImpl<UR>> {
        AddReactionUseCase::new(
            self.reaction_repo.clone(),
            self.posts.clone(),
            self.users.clone(),
        )
    }

    pub fn remove_reaction(&self) -> RemoveReactionUseCase<XR> {
        RemoveReactionUseCase::new(self.reaction_repo.clone())
    }

    pub fn reaction_queries(&self) -> ReactionQueries<XR> {
        ReactionQueries::new(self.reaction_repo.clone())
    }

    // feed

    pub fn user_feed(&self) -> GetUserFeedUseCase<SubscriptionsFacadeImpl<SR>, PostsFacadeImpl<PR>> {
        GetUserFeedUseCase::new(self.subscriptions.clone(), self.posts.clone())
    }
}
