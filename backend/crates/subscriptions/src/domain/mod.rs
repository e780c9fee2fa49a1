//! Domain Layer

pub mod entities;
pub mod policy;
pub mod repository;

pub use entities::Subscription;
pub use repository::SubscriptionRepository;
