//! Domain Layer

pub mod entities;
pub mod repository;
pub mod value_objects;

pub use entities::User;
pub use repository::UserRepository;
