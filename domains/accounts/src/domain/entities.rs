//! Domain entities for the Bulletin accounts domain

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// User entity as stored.
///
/// Only the one-way password digest is persisted; the plaintext never
/// reaches the repository layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: String,
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields required to create a user
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub hashed_password: String,
}

/// Partial update to a user; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub username: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub hashed_password: Option<String>,
    pub is_active: Option<bool>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.username.is_none()
            && self.email.is_none()
            && self.full_name.is_none()
            && self.hashed_password.is_none()
            && self.is_active.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serialization_omits_digest() {
        let user = User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            full_name: "Alice Doe".to_string(),
            hashed_password: "aabb:ccdd".to_string(),
            is_active: true,
            created_at: Utc::now(),
        };

        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("hashed_password"));
        assert!(!json.contains("ccdd"));
    }

    #[test]
    fn test_changes_is_empty() {
        assert!(UserChanges::default().is_empty());
        assert!(!UserChanges {
            username: Some("bob".to_string()),
            ..Default::default()
        }
        .is_empty());
    }
}
