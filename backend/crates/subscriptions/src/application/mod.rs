//! Application Layer

mod privilege;
pub mod queries;
pub mod subscribe;
pub mod subscriptions_facade;
pub mod unsubscribe;

pub use queries::SubscriptionQueries;
pub use subscribe::{SubscribeInput, SubscribeOutput, SubscribeUseCase};
pub use unsubscribe::{UnsubscribeInput, UnsubscribeUseCase};
