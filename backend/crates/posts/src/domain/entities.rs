//! Post Entity

use chrono::{DateTime, Utc};
use kernel::acl::PostSummary;
use kernel::id::{CommunityId, PostId, UserId};

use crate::domain::value_objects::{PostContent, PostImages, PostKind};

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub post_id: PostId,
    pub community_id: CommunityId,
    pub author_id: UserId,
    pub kind: PostKind,
    pub content: PostContent,
    pub images: PostImages,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    pub fn new(
        community_id: CommunityId,
        author_id: UserId,
        kind: PostKind,
        content: PostContent,
        images: PostImages,
    ) -> Self {
        let now = Utc::now();
        Self {
            post_id: PostId::new(),
            community_id,
            author_id,
            kind,
            content,
            images,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn to_summary(&self) -> PostSummary {
        PostSummary {
            post_id: self.post_id,
            community_id: self.community_id,
            author_id: self.author_id,
            kind: self.kind.code().to_string(),
            content: self.content.as_str().to_string(),
            images: self.images.to_strings(),
            created_at: self.created_at,
        }
    }
}
