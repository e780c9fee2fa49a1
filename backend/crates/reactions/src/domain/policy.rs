//! Reaction removal policy

use kernel::authz::{Decision, PolicyRule};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionRule {
    AuthorRemoval,
    RemovalRequiresAuthor,
}

impl PolicyRule for ReactionRule {
    fn code(&self) -> &'static str {
        match self {
            ReactionRule::AuthorRemoval => "author_removal",
            ReactionRule::RemovalRequiresAuthor => "removal_requires_author",
        }
    }

    fn message(&self) -> &'static str {
        match self {
            ReactionRule::AuthorRemoval => "authors may remove their reactions",
            ReactionRule::RemovalRequiresAuthor => "only the reaction author can remove it",
        }
    }
}

pub fn evaluate_removal(is_author: bool) -> Decision<ReactionRule> {
    if is_author {
        Decision::Allow(ReactionRule::AuthorRemoval)
    } else {
        Decision::Deny(ReactionRule::RemovalRequiresAuthor)
    }
}
