//! User service - Handles user-related use cases.
//!
//! SOLID (SRP): Handles user-related use cases only.

use async_trait::async_trait;

use common::{AppResult, Context};
use domain::User;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, ctx: Context, id: &str) -> AppResult<User>;

    /// Create a new user
    async fn create_user(&self, ctx: Context, user: User) -> AppResult<()>;
}
