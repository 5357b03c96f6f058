//! Todo-only data access contract.

use async_trait::async_trait;

use common::{AppResult, Context};
use domain::Todo;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Todo repository trait for dependency injection.
///
/// `user_id` on a todo is never checked against users here.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Find todo by ID, `NotFound` if absent
    async fn get_todo(&self, ctx: Context, id: &str) -> AppResult<Todo>;

    /// List all todos in no particular order
    async fn list_todos(&self, ctx: Context) -> AppResult<Vec<Todo>>;

    /// List todos owned by `user_id`; empty when none match, even for unknown users
    async fn list_user_todos(&self, ctx: Context, user_id: &str) -> AppResult<Vec<Todo>>;

    /// Store a new todo under its ID, `InvalidArgument` if the ID is empty
    async fn create_todo(&self, ctx: Context, todo: Todo) -> AppResult<()>;

    /// Replace an existing todo wholesale, `NotFound` if absent
    async fn update_todo(&self, ctx: Context, todo: Todo) -> AppResult<()>;

    /// Remove todo by ID, `NotFound` if absent
    async fn delete_todo(&self, ctx: Context, id: &str) -> AppResult<()>;

    /// Set `completed` and refresh `updated_at`, `NotFound` if absent
    async fn mark_todo_complete(&self, ctx: Context, id: &str) -> AppResult<()>;
}
