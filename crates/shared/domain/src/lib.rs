//! Domain layer - Core business entities and value objects.
//!
//! This crate contains the plain User and Todo records with no
//! infrastructure dependencies. Stores and services build on these types.

pub mod constants;
pub mod entity;
pub mod error;
pub mod todo;
pub mod user;

pub use constants::*;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use todo::Todo;
pub use user::User;
