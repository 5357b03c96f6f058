//! Todo service - Handles todo use cases and the user ownership rule.
//!
//! A todo may only be listed for, or attached to, a user that exists.

use async_trait::async_trait;

use common::{AppError, AppResult, Context};
use domain::Todo;

/// Todo service trait for dependency injection.
#[async_trait]
pub trait TodoService: Send + Sync {
    /// List todos of an existing user, `UserNotFound` otherwise
    async fn get_user_todos(&self, ctx: Context, user_id: &str) -> AppResult<Vec<Todo>>;

    /// Create a todo for an existing user, `CannotCreateForMissingUser` otherwise
    async fn create_todo(&self, ctx: Context, todo: Todo) -> AppResult<()>;

    /// Mark a todo complete without re-checking its owner
    async fn complete_todo(&self, ctx: Context, id: &str) -> AppResult<()>;
}

/// Translate a failed owner lookup before listing todos.
///
/// Only a store miss becomes `UserNotFound`; anything else propagates as is.
pub(crate) fn owner_missing_for_listing(err: AppError, user_id: &str) -> AppError {
    if err.is_not_found() {
        AppError::UserNotFound(user_id.to_string())
    } else {
        err
    }
}

/// Translate a failed owner lookup before creating a todo.
pub(crate) fn owner_missing_for_create(err: AppError, user_id: &str) -> AppError {
    if err.is_not_found() {
        AppError::CannotCreateForMissingUser(user_id.to_string())
    } else {
        err
    }
}
