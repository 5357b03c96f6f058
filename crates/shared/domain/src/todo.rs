//! Todo domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::TODO_KIND;
use crate::entity::Entity;

/// Todo domain entity
///
/// `user_id` is a plain reference. Nothing at this level checks that the
/// user exists; that rule lives in the todo service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Todo {
    /// Create a new, not yet completed todo stamped with the current time
    pub fn new(
        id: impl Into<String>,
        user_id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            user_id: user_id.into(),
            title: title.into(),
            description: description.into(),
            completed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Mark the todo as completed.
    ///
    /// `updated_at` never moves backwards, even if the wall clock does.
    pub fn mark_complete(&mut self) {
        self.completed = true;
        self.updated_at = Utc::now().max(self.updated_at);
    }
}

impl Entity for Todo {
    const KIND: &'static str = TODO_KIND;

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_new_todo_is_pending() {
        let todo = Todo::new("t1", "u1", "Compare interfaces", "Big vs small");

        assert!(!todo.completed);
        assert_eq!(todo.user_id, "u1");
        assert_eq!(todo.created_at, todo.updated_at);
    }

    #[test]
    fn test_mark_complete_advances_updated_at() {
        let mut todo = Todo::new("t1", "u1", "Title", "Description");
        let before = todo.updated_at;

        todo.mark_complete();

        assert!(todo.completed);
        assert!(todo.updated_at >= before);
    }

    #[test]
    fn test_mark_complete_never_moves_backwards() {
        let mut todo = Todo::new("t1", "u1", "Title", "Description");
        let future = Utc::now() + Duration::hours(1);
        todo.updated_at = future;

        todo.mark_complete();

        assert_eq!(todo.updated_at, future);
    }

    #[test]
    fn test_mark_complete_is_idempotent() {
        let mut todo = Todo::new("t1", "u1", "Title", "Description");

        todo.mark_complete();
        todo.mark_complete();

        assert!(todo.completed);
    }

    #[test]
    fn test_completed_defaults_to_false_when_missing() {
        let json = r#"{
            "id": "t1",
            "user_id": "u1",
            "title": "Title",
            "description": "Description",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }"#;

        let todo: Todo = serde_json::from_str(json).unwrap();

        assert!(!todo.completed);
    }
}
