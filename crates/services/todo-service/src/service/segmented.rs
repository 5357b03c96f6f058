//! Services built on the segmented `UserRepository`/`TodoRepository` contracts.
//!
//! Each service receives exactly the capabilities it uses. Test doubles are
//! the small `MockUserRepository` and `MockTodoRepository`; the todo service
//! needs both, which is the one cost of this shape.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, Context};
use domain::{Todo, User};

use super::todo_service::{owner_missing_for_create, owner_missing_for_listing};
use super::{TodoService, UserService};
use crate::repository::{TodoRepository, UserRepository};

/// User service over the user-only contract.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, ctx: Context, id: &str) -> AppResult<User> {
        self.users.get_user(ctx, id).await
    }

    async fn create_user(&self, ctx: Context, user: User) -> AppResult<()> {
        self.users.create_user(ctx, user).await
    }
}

/// Todo service over the todo contract, plus the user contract for owner checks.
pub struct TodoManager {
    todos: Arc<dyn TodoRepository>,
    users: Arc<dyn UserRepository>,
}

impl TodoManager {
    /// Create new todo service instance with repositories
    pub fn new(todos: Arc<dyn TodoRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { todos, users }
    }
}

#[async_trait]
impl TodoService for TodoManager {
    async fn get_user_todos(&self, ctx: Context, user_id: &str) -> AppResult<Vec<Todo>> {
        self.users
            .get_user(ctx.clone(), user_id)
            .await
            .map_err(|e| owner_missing_for_listing(e, user_id))?;

        self.todos.list_user_todos(ctx, user_id).await
    }

    async fn create_todo(&self, ctx: Context, todo: Todo) -> AppResult<()> {
        self.users
            .get_user(ctx.clone(), &todo.user_id)
            .await
            .map_err(|e| owner_missing_for_create(e, &todo.user_id))?;

        self.todos.create_todo(ctx, todo).await
    }

    async fn complete_todo(&self, ctx: Context, id: &str) -> AppResult<()> {
        self.todos.mark_todo_complete(ctx, id).await
    }
}
