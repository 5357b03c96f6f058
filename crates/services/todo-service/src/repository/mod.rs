//! Repository layer for data access.
//!
//! Two ways to expose the same store: the unified `DataStore`, or the
//! segmented `UserRepository` + `TodoRepository` pair. `InMemoryStore`
//! implements all three.

mod data_store;
mod keyspace;
mod memory;
mod todo_repository;
mod user_repository;

pub use data_store::DataStore;
pub use keyspace::Keyspace;
pub use memory::InMemoryStore;
pub use todo_repository::TodoRepository;
pub use user_repository::UserRepository;

// Export mocks for tests
#[cfg(any(test, feature = "test-utils"))]
pub use data_store::MockDataStore;
#[cfg(any(test, feature = "test-utils"))]
pub use todo_repository::MockTodoRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
