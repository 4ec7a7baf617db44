//! Post management API handlers
//!
//! Reads are public (or owner-filtered for the "mine" view); creation
//! takes the owner from the authenticated principal; update and delete
//! pass through the ownership guard before touching the store.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use bulletin_auth::CurrentUser;
use bulletin_common::{Error, Pagination, Result, ValidatedJson};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::state::PostsState;
use crate::domain::entities::{NewPost, Post, PostChanges};

fn default_published() -> bool {
    true
}

/// Request for creating a post
#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,

    #[validate(length(min = 1))]
    pub content: String,

    #[serde(default = "default_published")]
    pub published: bool,
}

/// Request for updating a post
#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: Option<String>,

    #[validate(length(min = 1))]
    pub content: Option<String>,

    pub published: Option<bool>,
}

/// Post response for API operations
#[derive(Debug, Serialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub title: String,
    pub content: String,
    pub published: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            owner_id: post.owner_id,
            title: post.title,
            content: post.content,
            published: post.published,
            created_at: post.created_at,
        }
    }
}

/// Create a post owned by the current user
///
/// **POST /posts**
pub async fn create_post(
    CurrentUser(principal): CurrentUser,
    State(state): State<PostsState>,
    ValidatedJson(request): ValidatedJson<CreatePostRequest>,
) -> Result<(StatusCode, Json<PostResponse>)> {
    let new_post = NewPost {
        owner_id: principal.id,
        title: request.title,
        content: request.content,
        published: request.published,
    };

    let post = state.posts.create(&new_post).await?;

    Ok((StatusCode::CREATED, Json(post.into())))
}

/// List posts
///
/// **GET /posts** (public)
pub async fn list_posts(
    State(state): State<PostsState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<PostResponse>>> {
    let posts = state
        .posts
        .list(pagination.offset(), pagination.limit())
        .await?;

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// List the current user's posts
///
/// **GET /posts/mine**
pub async fn list_my_posts(
    CurrentUser(principal): CurrentUser,
    State(state): State<PostsState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<PostResponse>>> {
    let posts = state
        .posts
        .list_by_owner(principal.id, pagination.offset(), pagination.limit())
        .await?;

    Ok(Json(posts.into_iter().map(PostResponse::from).collect()))
}

/// Get a post by id
///
/// **GET /posts/{id}** (public)
pub async fn get_post(
    State(state): State<PostsState>,
    Path(post_id): Path<Uuid>,
) -> Result<Json<PostResponse>> {
    let post = state
        .posts
        .get_by_id(post_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Post with id {} was not found", post_id)))?;

    Ok(Json(post.into()))
}

/// Update a post (owner only)
///
/// **PATCH /posts/{id}**
pub async fn update_post(
    CurrentUser(principal): CurrentUser,
    State(state): State<PostsState>,
    Path(post_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdatePostRequest>,
) -> Result<Json<PostResponse>> {
    let post = state
        .posts
        .get_by_id(post_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Post with id {} was not found", post_id)))?;

    principal.ensure_owns(post.owner_id)?;

    let changes = PostChanges {
        title: request.title,
        content: request.content,
        published: request.published,
    };

    let post = state.posts.update(post_id, &changes).await?;

    Ok(Json(post.into()))
}

/// Delete a post (owner only)
///
/// **DELETE /posts/{id}**
pub async fn delete_post(
    CurrentUser(principal): CurrentUser,
    State(state): State<PostsState>,
    Path(post_id): Path<Uuid>,
) -> Result<StatusCode> {
    let post = state
        .posts
        .get_by_id(post_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("Post with id {} was not found", post_id)))?;

    principal.ensure_owns(post.owner_id)?;

    state.posts.delete(post_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_validation() {
        let valid = CreatePostRequest {
            title: "First post".to_string(),
            content: "Hello".to_string(),
            published: true,
        };
        assert!(valid.validate().is_ok());

        let empty_title = CreatePostRequest {
            title: String::new(),
            content: "Hello".to_string(),
            published: true,
        };
        assert!(empty_title.validate().is_err());
    }

    #[test]
    fn test_create_request_published_defaults_true() {
        let request: CreatePostRequest =
            serde_json::from_str(r#"{"title": "t", "content": "c"}"#).unwrap();
        assert!(request.published);
    }

    #[test]
    fn test_post_response_includes_owner() {
        let post = Post {
            id: Uuid::new_v4(),
            owner_id: Uuid::new_v4(),
            title: "t".to_string(),
            content: "c".to_string(),
            published: true,
            created_at: Utc::now(),
        };
        let owner_id = post.owner_id;

        let response = PostResponse::from(post);
        assert_eq!(response.owner_id, owner_id);
    }
}
