//! Services built on the unified `DataStore` contract.
//!
//! Every service holds the whole store. A test double for either service
//! is a `MockDataStore`, which carries expectations for all twelve
//! operations even though each service touches two or three.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, Context};
use domain::{Todo, User};

use super::todo_service::{owner_missing_for_create, owner_missing_for_listing};
use super::{TodoService, UserService};
use crate::repository::DataStore;

/// User service over the unified contract.
pub struct UserManager {
    store: Arc<dyn DataStore>,
}

impl UserManager {
    /// Create new user service instance with the data store
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, ctx: Context, id: &str) -> AppResult<User> {
        self.store.get_user(ctx, id).await
    }

    async fn create_user(&self, ctx: Context, user: User) -> AppResult<()> {
        self.store.create_user(ctx, user).await
    }
}

/// Todo service over the unified contract.
pub struct TodoManager {
    store: Arc<dyn DataStore>,
}

impl TodoManager {
    /// Create new todo service instance with the data store
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TodoService for TodoManager {
    async fn get_user_todos(&self, ctx: Context, user_id: &str) -> AppResult<Vec<Todo>> {
        self.store
            .get_user(ctx.clone(), user_id)
            .await
            .map_err(|e| owner_missing_for_listing(e, user_id))?;

        self.store.list_user_todos(ctx, user_id).await
    }

    async fn create_todo(&self, ctx: Context, todo: Todo) -> AppResult<()> {
        self.store
            .get_user(ctx.clone(), &todo.user_id)
            .await
            .map_err(|e| owner_missing_for_create(e, &todo.user_id))?;

        self.store.create_todo(ctx, todo).await
    }

    async fn complete_todo(&self, ctx: Context, id: &str) -> AppResult<()> {
        self.store.mark_todo_complete(ctx, id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppError;
    use mockall::Sequence;

    use crate::repository::MockDataStore;

    fn test_user(id: &str) -> User {
        User::new(id, "Test User", "test@example.com")
    }

    fn test_todo(id: &str, user_id: &str) -> Todo {
        Todo::new(id, user_id, "Test Todo", "This is a test todo")
    }

    fn user_exists(store: &mut MockDataStore, id: &'static str) {
        store
            .expect_get_user()
            .withf(move |_, user_id| user_id == id)
            .returning(|_, user_id| Ok(test_user(user_id)));
    }

    fn user_missing(store: &mut MockDataStore) {
        store
            .expect_get_user()
            .returning(|_, user_id| Err(AppError::not_found("user", user_id)));
    }

    #[tokio::test]
    async fn test_get_user_success() {
        let mut store = MockDataStore::new();
        user_exists(&mut store, "user1");

        let service = UserManager::new(Arc::new(store));
        let user = service.get_user(Context::background(), "user1").await.unwrap();

        assert_eq!(user.id, "user1");
    }

    #[tokio::test]
    async fn test_get_user_not_found_passes_through() {
        let mut store = MockDataStore::new();
        user_missing(&mut store);

        let service = UserManager::new(Arc::new(store));
        let err = service
            .get_user(Context::background(), "nonexistent")
            .await
            .unwrap_err();

        assert_eq!(err, AppError::not_found("user", "nonexistent"));
    }

    #[tokio::test]
    async fn test_create_user_delegates() {
        let mut store = MockDataStore::new();
        store
            .expect_create_user()
            .withf(|_, user| user.id == "user1")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = UserManager::new(Arc::new(store));
        let result = service
            .create_user(Context::background(), test_user("user1"))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_get_user_todos_checks_user_first() {
        let mut seq = Sequence::new();
        let mut store = MockDataStore::new();
        store
            .expect_get_user()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, id| Ok(test_user(id)));
        store
            .expect_list_user_todos()
            .withf(|_, user_id| user_id == "user1")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, user_id| Ok(vec![test_todo("todo1", user_id)]));

        let service = TodoManager::new(Arc::new(store));
        let todos = service
            .get_user_todos(Context::background(), "user1")
            .await
            .unwrap();

        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].id, "todo1");
    }

    #[tokio::test]
    async fn test_get_user_todos_missing_user_skips_listing() {
        let mut store = MockDataStore::new();
        user_missing(&mut store);
        store.expect_list_user_todos().never();

        let service = TodoManager::new(Arc::new(store));
        let err = service
            .get_user_todos(Context::background(), "nonexistent")
            .await
            .unwrap_err();

        assert_eq!(err, AppError::UserNotFound("nonexistent".into()));
    }

    #[tokio::test]
    async fn test_get_user_todos_propagates_internal_errors() {
        let mut store = MockDataStore::new();
        store
            .expect_get_user()
            .returning(|_, _| Err(AppError::internal("user keyspace lock poisoned")));
        store.expect_list_user_todos().never();

        let service = TodoManager::new(Arc::new(store));
        let err = service
            .get_user_todos(Context::background(), "user1")
            .await
            .unwrap_err();

        assert_eq!(err.code(), "INTERNAL_ERROR");
    }

    #[tokio::test]
    async fn test_create_todo_for_existing_user() {
        let mut store = MockDataStore::new();
        user_exists(&mut store, "user1");
        store
            .expect_create_todo()
            .withf(|_, todo| todo.id == "todo1" && todo.user_id == "user1")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = TodoManager::new(Arc::new(store));
        let result = service
            .create_todo(Context::background(), test_todo("todo1", "user1"))
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_todo_for_missing_user_is_rejected() {
        let mut store = MockDataStore::new();
        user_missing(&mut store);
        store.expect_create_todo().never();

        let service = TodoManager::new(Arc::new(store));
        let err = service
            .create_todo(Context::background(), test_todo("todo1", "ghost"))
            .await
            .unwrap_err();

        assert_eq!(err, AppError::CannotCreateForMissingUser("ghost".into()));
    }

    #[tokio::test]
    async fn test_complete_todo_does_not_look_up_user() {
        let mut store = MockDataStore::new();
        store.expect_get_user().never();
        store
            .expect_mark_todo_complete()
            .withf(|_, id| id == "todo1")
            .times(1)
            .returning(|_, _| Ok(()));

        let service = TodoManager::new(Arc::new(store));
        let result = service.complete_todo(Context::background(), "todo1").await;

        assert!(result.is_ok());
    }
}
