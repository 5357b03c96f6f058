//! User-only data access contract.

use async_trait::async_trait;

use common::{AppResult, Context};
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Exposes only user operations, so a consumer holding it cannot reach
/// todo data and a test double for it has five methods to emulate.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID, `NotFound` if absent
    async fn get_user(&self, ctx: Context, id: &str) -> AppResult<User>;

    /// List all users in no particular order
    async fn list_users(&self, ctx: Context) -> AppResult<Vec<User>>;

    /// Store a new user under its ID, `InvalidArgument` if the ID is empty
    async fn create_user(&self, ctx: Context, user: User) -> AppResult<()>;

    /// Replace an existing user wholesale, `NotFound` if absent
    async fn update_user(&self, ctx: Context, user: User) -> AppResult<()>;

    /// Remove user by ID, `NotFound` if absent. Owned todos are kept.
    async fn delete_user(&self, ctx: Context, id: &str) -> AppResult<()>;
}
