//! Domain Layer

pub mod entities;
pub mod policy;
pub mod repository;
pub mod value_objects;

pub use entities::Community;
pub use repository::CommunityRepository;
