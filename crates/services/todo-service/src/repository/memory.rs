//! In-memory store satisfying every data access contract.
//!
//! The same `InMemoryStore` can be handed out as `Arc<dyn DataStore>`,
//! `Arc<dyn UserRepository>` or `Arc<dyn TodoRepository>`. All three views
//! delegate to the same keyspaces, so behavior cannot differ between them.
//!
//! Known gaps, kept on purpose:
//! - `delete_user` does not cascade; the user's todos stay reachable.
//! - `list_user_todos` is a linear scan; there is no index by `user_id`.

use async_trait::async_trait;

use common::{AppResult, Context, CreatePolicy, StoreConfig};
use domain::{Todo, User};

use super::keyspace::Keyspace;
use super::{DataStore, TodoRepository, UserRepository};

/// In-memory implementation of all data access contracts
pub struct InMemoryStore {
    users: Keyspace<User>,
    todos: Keyspace<Todo>,
    create_policy: CreatePolicy,
}

impl InMemoryStore {
    /// Create an empty store that rejects duplicate IDs
    pub fn new() -> Self {
        Self::with_config(&StoreConfig::default())
    }

    /// Create an empty store from configuration
    pub fn with_config(config: &StoreConfig) -> Self {
        Self {
            users: Keyspace::new(),
            todos: Keyspace::new(),
            create_policy: config.create_policy,
        }
    }

    pub fn create_policy(&self) -> CreatePolicy {
        self.create_policy
    }

    fn find_user(&self, id: &str) -> AppResult<User> {
        self.users.get(id)
    }

    fn find_todo(&self, id: &str) -> AppResult<Todo> {
        self.todos.get(id)
    }

    fn todos_of(&self, user_id: &str) -> AppResult<Vec<Todo>> {
        self.todos.filter(|todo| todo.user_id == user_id)
    }

    fn complete(&self, id: &str) -> AppResult<()> {
        self.todos.modify(id, Todo::mark_complete)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Segmented contracts
// =============================================================================

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn get_user(&self, _ctx: Context, id: &str) -> AppResult<User> {
        self.find_user(id)
    }

    async fn list_users(&self, _ctx: Context) -> AppResult<Vec<User>> {
        self.users.list()
    }

    async fn create_user(&self, _ctx: Context, user: User) -> AppResult<()> {
        self.users.create(user, self.create_policy)
    }

    async fn update_user(&self, _ctx: Context, user: User) -> AppResult<()> {
        self.users.update(user)
    }

    async fn delete_user(&self, _ctx: Context, id: &str) -> AppResult<()> {
        self.users.delete(id)
    }
}

#[async_trait]
impl TodoRepository for InMemoryStore {
    async fn get_todo(&self, _ctx: Context, id: &str) -> AppResult<Todo> {
        self.find_todo(id)
    }

    async fn list_todos(&self, _ctx: Context) -> AppResult<Vec<Todo>> {
        self.todos.list()
    }

    async fn list_user_todos(&self, _ctx: Context, user_id: &str) -> AppResult<Vec<Todo>> {
        self.todos_of(user_id)
    }

    async fn create_todo(&self, _ctx: Context, todo: Todo) -> AppResult<()> {
        self.todos.create(todo, self.create_policy)
    }

    async fn update_todo(&self, _ctx: Context, todo: Todo) -> AppResult<()> {
        self.todos.update(todo)
    }

    async fn delete_todo(&self, _ctx: Context, id: &str) -> AppResult<()> {
        self.todos.delete(id)
    }

    async fn mark_todo_complete(&self, _ctx: Context, id: &str) -> AppResult<()> {
        self.complete(id)
    }
}

// =============================================================================
// Unified contract
// =============================================================================

#[async_trait]
impl DataStore for InMemoryStore {
    async fn get_user(&self, _ctx: Context, id: &str) -> AppResult<User> {
        self.find_user(id)
    }

    async fn list_users(&self, _ctx: Context) -> AppResult<Vec<User>> {
        self.users.list()
    }

    async fn create_user(&self, _ctx: Context, user: User) -> AppResult<()> {
        self.users.create(user, self.create_policy)
    }

    async fn update_user(&self, _ctx: Context, user: User) -> AppResult<()> {
        self.users.update(user)
    }

    async fn delete_user(&self, _ctx: Context, id: &str) -> AppResult<()> {
        self.users.delete(id)
    }

    async fn get_todo(&self, _ctx: Context, id: &str) -> AppResult<Todo> {
        self.find_todo(id)
    }

    async fn list_todos(&self, _ctx: Context) -> AppResult<Vec<Todo>> {
        self.todos.list()
    }

    async fn list_user_todos(&self, _ctx: Context, user_id: &str) -> AppResult<Vec<Todo>> {
        self.todos_of(user_id)
    }

    async fn create_todo(&self, _ctx: Context, todo: Todo) -> AppResult<()> {
        self.todos.create(todo, self.create_policy)
    }

    async fn update_todo(&self, _ctx: Context, todo: Todo) -> AppResult<()> {
        self.todos.update(todo)
    }

    async fn delete_todo(&self, _ctx: Context, id: &str) -> AppResult<()> {
        self.todos.delete(id)
    }

    async fn mark_todo_complete(&self, _ctx: Context, id: &str) -> AppResult<()> {
        self.complete(id)
    }
}
