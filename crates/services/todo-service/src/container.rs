//! Service Container - Wires one store into either contract shape.
//!
//! SOLID (DIP): Consumers see service traits, never the store type.

use std::fmt;
use std::sync::Arc;

use clap::ValueEnum;
use serde::Serialize;

use crate::repository::{DataStore, InMemoryStore, TodoRepository, UserRepository};
use crate::service::{segmented, unified, TodoService, UserService};

/// Which data access contract the services are built on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ContractShape {
    /// One `DataStore` holding every operation
    Unified,
    /// Separate `UserRepository` and `TodoRepository`
    Segmented,
}

impl fmt::Display for ContractShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContractShape::Unified => write!(f, "unified"),
            ContractShape::Segmented => write!(f, "segmented"),
        }
    }
}

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
pub trait ServiceContainer: Send + Sync {
    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get todo service
    fn todos(&self) -> Arc<dyn TodoService>;

    /// Contract the services were built on
    fn shape(&self) -> ContractShape;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    user_service: Arc<dyn UserService>,
    todo_service: Arc<dyn TodoService>,
    shape: ContractShape,
}

impl Services {
    /// Build services on the unified contract
    pub fn unified(store: Arc<dyn DataStore>) -> Self {
        Self {
            user_service: Arc::new(unified::UserManager::new(store.clone())),
            todo_service: Arc::new(unified::TodoManager::new(store)),
            shape: ContractShape::Unified,
        }
    }

    /// Build services on the segmented contracts
    pub fn segmented(users: Arc<dyn UserRepository>, todos: Arc<dyn TodoRepository>) -> Self {
        Self {
            user_service: Arc::new(segmented::UserManager::new(users.clone())),
            todo_service: Arc::new(segmented::TodoManager::new(todos, users)),
            shape: ContractShape::Segmented,
        }
    }

    /// Build services from one in-memory store viewed through `shape`
    pub fn from_store(store: Arc<InMemoryStore>, shape: ContractShape) -> Self {
        match shape {
            ContractShape::Unified => Self::unified(store),
            ContractShape::Segmented => Self::segmented(store.clone(), store),
        }
    }
}

impl ServiceContainer for Services {
    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn todos(&self) -> Arc<dyn TodoService> {
        self.todo_service.clone()
    }

    fn shape(&self) -> ContractShape {
        self.shape
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::Context;
    use domain::{Todo, User};

    #[tokio::test]
    async fn test_both_shapes_reach_the_same_store() {
        let store = Arc::new(InMemoryStore::new());
        let unified = Services::from_store(store.clone(), ContractShape::Unified);
        let segmented = Services::from_store(store, ContractShape::Segmented);
        let ctx = Context::background();

        unified
            .users()
            .create_user(ctx.clone(), User::new("u1", "Taro", "taro@example.com"))
            .await
            .unwrap();
        segmented
            .todos()
            .create_todo(ctx.clone(), Todo::new("t1", "u1", "Title", "Description"))
            .await
            .unwrap();

        let todos = unified.todos().get_user_todos(ctx, "u1").await.unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(unified.shape(), ContractShape::Unified);
        assert_eq!(segmented.shape(), ContractShape::Segmented);
    }

    #[test]
    fn test_shape_display_matches_cli_value() {
        assert_eq!(ContractShape::Unified.to_string(), "unified");
        assert_eq!(
            ContractShape::from_str("segmented", true),
            Ok(ContractShape::Segmented)
        );
    }
}
