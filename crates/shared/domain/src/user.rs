//! User domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::USER_KIND;
use crate::entity::Entity;

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Stored as given, never validated
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user stamped with the current time
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl Entity for User {
    const KIND: &'static str = USER_KIND;

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DomainError;

    #[test]
    fn test_new_user_timestamps_match() {
        let user = User::new("u1", "Taro Yamada", "yamada@example.com");

        assert_eq!(user.id, "u1");
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_empty_id_is_rejected() {
        let user = User::new("", "Nobody", "nobody@example.com");

        assert_eq!(user.validate_identity(), Err(DomainError::EmptyId("user")));
    }

    #[test]
    fn test_email_is_not_validated() {
        let user = User::new("u1", "Taro", "not-an-email");

        assert!(user.validate_identity().is_ok());
    }

    #[test]
    fn test_serializes_with_snake_case_fields() {
        let user = User::new("u1", "Taro", "taro@example.com");
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(json["id"], "u1");
        assert!(json.get("created_at").is_some());
    }
}
