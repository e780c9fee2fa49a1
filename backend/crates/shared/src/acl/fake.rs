//! In-memory facade fakes for tests
//!
//! Every fake can be switched into outage mode with `fail_all()`, after which
//! each call returns an internal error.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::acl::communities::CommunitiesFacade;
use crate::acl::identity::IdentityRef;
use crate::acl::posts::{PostLifecycle, PostSummary, PostsFacade};
use crate::acl::reactions::ReactionsFacade;
use crate::acl::subscriptions::{SubscriptionLifecycle, SubscriptionsFacade};
use crate::acl::users::UsersFacade;
use crate::error::app_error::{AppError, AppResult};
use crate::id::{CommunityId, PostId, ProfileId, SubscriptionId, UserId};
use crate::page::Page;
use crate::privacy::Privacy;
use crate::role::CommunityRole;

fn outage(flag: &AtomicBool, facade: &'static str) -> AppResult<()> {
    if flag.load(Ordering::SeqCst) {
        return Err(AppError::internal(format!("{} facade unavailable", facade)));
    }
    Ok(())
}

#[derive(Default)]
pub struct FakeCommunities {
    communities: Mutex<HashMap<CommunityId, (IdentityRef, Privacy)>>,
    failing: AtomicBool,
}

impl FakeCommunities {
    pub fn insert(&self, community_id: CommunityId, owner: IdentityRef, privacy: Privacy) {
        self.communities
            .lock()
            .expect("communities lock poisoned")
            .insert(community_id, (owner, privacy));
    }

    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    fn get(&self, community_id: &CommunityId) -> Option<(IdentityRef, Privacy)> {
        self.communities
            .lock()
            .expect("communities lock poisoned")
            .get(community_id)
            .copied()
    }
}

impl CommunitiesFacade for FakeCommunities {
    async fn exists(&self, community_id: &CommunityId) -> AppResult<bool> {
        outage(&self.failing, "communities")?;
        Ok(self.get(community_id).is_some())
    }

    async fn privacy(&self, community_id: &CommunityId) -> AppResult<Privacy> {
        outage(&self.failing, "communities")?;
        self.get(community_id)
            .map(|(_, privacy)| privacy)
            .ok_or_else(|| AppError::not_found("Community not found"))
    }

    async fn owner_id(&self, community_id: &CommunityId) -> AppResult<IdentityRef> {
        outage(&self.failing, "communities")?;
        self.get(community_id)
            .map(|(owner, _)| owner)
            .ok_or_else(|| AppError::not_found("Community not found"))
    }

    async fn is_owner(
        &self,
        community_id: &CommunityId,
        candidate: IdentityRef,
    ) -> AppResult<bool> {
        outage(&self.failing, "communities")?;
        Ok(self
            .get(community_id)
            .is_some_and(|(owner, _)| owner.same_uuid(&candidate)))
    }
}

#[derive(Default)]
pub struct FakeUsers {
    users: Mutex<HashMap<UserId, Option<ProfileId>>>,
    profile_lookups: AtomicUsize,
    failing: AtomicBool,
}

impl FakeUsers {
    pub fn insert(&self, user_id: UserId, profile_id: Option<ProfileId>) {
        self.users
            .lock()
            .expect("users lock poisoned")
            .insert(user_id, profile_id);
    }

    /// Number of `profile_id_of` calls served so far
    pub fn profile_lookups(&self) -> usize {
        self.profile_lookups.load(Ordering::SeqCst)
    }

    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }
}

impl UsersFacade for FakeUsers {
    async fn exists(&self, user_id: &UserId) -> AppResult<bool> {
        outage(&self.failing, "users")?;
        Ok(self
            .users
            .lock()
            .expect("users lock poisoned")
            .contains_key(user_id))
    }

    async fn profile_id_of(&self, user_id: &UserId) -> AppResult<Option<ProfileId>> {
        outage(&self.failing, "users")?;
        self.profile_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .users
            .lock()
            .expect("users lock poisoned")
            .get(user_id)
            .copied()
            .flatten())
    }

    async fn user_id_of_profile(&self, profile_id: &ProfileId) -> AppResult<Option<UserId>> {
        outage(&self.failing, "users")?;
        Ok(self
            .users
            .lock()
            .expect("users lock poisoned")
            .iter()
            .find(|(_, profile)| profile.as_ref() == Some(profile_id))
            .map(|(user_id, _)| *user_id))
    }

    async fn role_name_valid(&self, role_name: &str) -> AppResult<bool> {
        outage(&self.failing, "users")?;
        Ok(CommunityRole::parse(role_name).is_ok())
    }
}

#[derive(Default)]
pub struct FakeSubscriptions {
    roles: Mutex<HashMap<(UserId, CommunityId), (SubscriptionId, CommunityRole)>>,
    failing: AtomicBool,
}

impl FakeSubscriptions {
    pub fn grant(&self, user_id: UserId, community_id: CommunityId, role: CommunityRole) {
        self.roles
            .lock()
            .expect("subscriptions lock poisoned")
            .insert((user_id, community_id), (SubscriptionId::new(), role));
    }

    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.roles.lock().expect("subscriptions lock poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SubscriptionsFacade for FakeSubscriptions {
    async fn role_of(
        &self,
        user_id: &UserId,
        community_id: &CommunityId,
    ) -> AppResult<Option<CommunityRole>> {
        outage(&self.failing, "subscriptions")?;
        Ok(self
            .roles
            .lock()
            .expect("subscriptions lock poisoned")
            .get(&(*user_id, *community_id))
            .map(|(_, role)| *role))
    }

    async fn is_subscribed(
        &self,
        user_id: &UserId,
        community_id: &CommunityId,
    ) -> AppResult<bool> {
        outage(&self.failing, "subscriptions")?;
        Ok(self
            .roles
            .lock()
            .expect("subscriptions lock poisoned")
            .contains_key(&(*user_id, *community_id)))
    }

    async fn communities_of(&self, user_id: &UserId) -> AppResult<Vec<CommunityId>> {
        outage(&self.failing, "subscriptions")?;
        Ok(self
            .roles
            .lock()
            .expect("subscriptions lock poisoned")
            .keys()
            .filter(|(user, _)| user == user_id)
            .map(|(_, community)| *community)
            .collect())
    }
}

impl SubscriptionLifecycle for FakeSubscriptions {
    async fn create_owner_subscription(
        &self,
        owner_id: &UserId,
        community_id: &CommunityId,
    ) -> AppResult<SubscriptionId> {
        outage(&self.failing, "subscriptions")?;
        let mut roles = self.roles.lock().expect("subscriptions lock poisoned");
        let (id, role) = roles
            .entry((*owner_id, *community_id))
            .or_insert_with(|| (SubscriptionId::new(), CommunityRole::Owner));
        *role = CommunityRole::Owner;
        Ok(*id)
    }

    async fn remove_all_for_community(&self, community_id: &CommunityId) -> AppResult<u64> {
        outage(&self.failing, "subscriptions")?;
        let mut roles = self.roles.lock().expect("subscriptions lock poisoned");
        let before = roles.len();
        roles.retain(|(_, community), _| community != community_id);
        Ok((before - roles.len()) as u64)
    }
}

#[derive(Default)]
pub struct FakePosts {
    posts: Mutex<Vec<PostSummary>>,
    failing: AtomicBool,
}

impl FakePosts {
    pub fn insert(&self, post: PostSummary) {
        self.posts.lock().expect("posts lock poisoned").push(post);
    }

    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }
}

impl PostsFacade for FakePosts {
    async fn exists(&self, post_id: &PostId) -> AppResult<bool> {
        outage(&self.failing, "posts")?;
        Ok(self
            .posts
            .lock()
            .expect("posts lock poisoned")
            .iter()
            .any(|post| &post.post_id == post_id))
    }

    async fn posts_for_communities(
        &self,
        community_ids: &[CommunityId],
        page: Page,
    ) -> AppResult<Vec<PostSummary>> {
        outage(&self.failing, "posts")?;
        let mut matching: Vec<PostSummary> = self
            .posts
            .lock()
            .expect("posts lock poisoned")
            .iter()
            .filter(|post| community_ids.contains(&post.community_id))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(page.slice(matching))
    }
}

impl PostLifecycle for FakePosts {
    async fn delete_all_for_community(
        &self,
        community_id: &CommunityId,
    ) -> AppResult<Vec<PostId>> {
        outage(&self.failing, "posts")?;
        let mut posts = self.posts.lock().expect("posts lock poisoned");
        let removed = posts
            .iter()
            .filter(|post| &post.community_id == community_id)
            .map(|post| post.post_id)
            .collect();
        posts.retain(|post| &post.community_id != community_id);
        Ok(removed)
    }
}

#[derive(Default)]
pub struct FakeReactions {
    cleared: Mutex<Vec<PostId>>,
    failing: AtomicBool,
}

impl FakeReactions {
    /// Posts whose reactions were cleared, in call order
    pub fn cleared(&self) -> Vec<PostId> {
        self.cleared.lock().expect("reactions lock poisoned").clone()
    }

    pub fn fail_all(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }
}

impl ReactionsFacade for FakeReactions {
    async fn remove_all_for_posts(&self, post_ids: &[PostId]) -> AppResult<u64> {
        outage(&self.failing, "reactions")?;
        self.cleared
            .lock()
            .expect("reactions lock poisoned")
            .extend_from_slice(post_ids);
        Ok(post_ids.len() as u64)
    }
}
