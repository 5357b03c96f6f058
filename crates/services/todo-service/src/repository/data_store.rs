//! Unified data access contract.

use async_trait::async_trait;

use common::{AppResult, Context};
use domain::{Todo, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Every user and todo operation behind one trait.
///
/// Semantics match `UserRepository` and `TodoRepository` exactly. A consumer
/// holding a `DataStore` can reach all twelve operations whether it needs them
/// or not.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait DataStore: Send + Sync {
    // User operations
    async fn get_user(&self, ctx: Context, id: &str) -> AppResult<User>;
    async fn list_users(&self, ctx: Context) -> AppResult<Vec<User>>;
    async fn create_user(&self, ctx: Context, user: User) -> AppResult<()>;
    async fn update_user(&self, ctx: Context, user: User) -> AppResult<()>;
    async fn delete_user(&self, ctx: Context, id: &str) -> AppResult<()>;

    // Todo operations
    async fn get_todo(&self, ctx: Context, id: &str) -> AppResult<Todo>;
    async fn list_todos(&self, ctx: Context) -> AppResult<Vec<Todo>>;
    async fn list_user_todos(&self, ctx: Context, user_id: &str) -> AppResult<Vec<Todo>>;
    async fn create_todo(&self, ctx: Context, todo: Todo) -> AppResult<()>;
    async fn update_todo(&self, ctx: Context, todo: Todo) -> AppResult<()>;
    async fn delete_todo(&self, ctx: Context, id: &str) -> AppResult<()>;
    async fn mark_todo_complete(&self, ctx: Context, id: &str) -> AppResult<()>;
}
