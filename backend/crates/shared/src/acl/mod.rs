//! Anti-corruption layer
//!
//! Narrow facades one bounded context exposes to the others. A context never
//! reads another context's store; it receives these traits through its
//! constructors and only sees kernel types across the boundary.
//!
//! Every method returns [`AppResult`](crate::error::app_error::AppResult). An
//! `Err` means the upstream context failed and is reported as internal by the
//! caller.

pub mod communities;
pub mod identity;
pub mod posts;
pub mod reactions;
pub mod subscriptions;
pub mod users;

#[cfg(any(test, feature = "testing"))]
pub mod fake;

pub use communities::CommunitiesFacade;
pub use identity::{IdentityRef, resolve_ownership_with_identity_fallback};
pub use posts::{PostLifecycle, PostSummary, PostsFacade};
pub use reactions::ReactionsFacade;
pub use subscriptions::{SubscriptionLifecycle, SubscriptionsFacade};
pub use users::UsersFacade;
