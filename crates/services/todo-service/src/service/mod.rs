//! Application services layer - Use cases and business logic.
//!
//! Each service trait has two implementations that differ only in the data
//! access contract they are built on: `unified` takes one `DataStore`,
//! `segmented` takes the narrow `UserRepository`/`TodoRepository` pair.

pub mod segmented;
mod todo_service;
pub mod unified;
mod user_service;

pub use todo_service::TodoService;
pub use user_service::UserService;
