//! Domain entities for the Bulletin posts domain

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity.
///
/// `owner_id` is the authorization anchor: mutation is permitted only
/// when it matches the requesting principal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Post {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields required to create a post
#[derive(Debug, Clone)]
pub struct NewPost {
    pub owner_id: Uuid,
    pub title: String,
    pub content: String,
    pub published: bool,
}

/// Partial update to a post; `None` fields are left unchanged
#[derive(Debug, Clone, Default)]
pub struct PostChanges {
    pub title: Option<String>,
    pub content: Option<String>,
    pub published: Option<bool>,
}

/// A like for a post.
///
/// Existence of the `(user_id, post_id)` row is the only signal; there
/// is no stored dislike state, absence means neutral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Vote {
    pub user_id: Uuid,
    pub post_id: Uuid,
}
