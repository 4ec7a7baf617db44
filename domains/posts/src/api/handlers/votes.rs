//! Vote API handler
//!
//! **POST /vote** with `dir == 1` records a like; any other direction
//! removes one. A vote row exists only for likes, so liking twice is a
//! conflict and unliking without a like is not found.

use axum::{extract::State, http::StatusCode, Json};
use bulletin_auth::CurrentUser;
use bulletin_common::{Error, RepositoryError, Result};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::api::state::PostsState;

/// Like direction: a vote row is created
pub const VOTE_LIKE: i16 = 1;

/// Request body for casting or removing a vote
#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    pub post_id: Uuid,
    pub dir: i16,
}

/// Cast or remove a like on a post
pub async fn vote(
    CurrentUser(principal): CurrentUser,
    State(state): State<PostsState>,
    Json(request): Json<VoteRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    // The target must exist regardless of direction
    let post = state
        .posts
        .get_by_id(request.post_id)
        .await?
        .ok_or_else(|| {
            Error::NotFound(format!("Post with id {} was not found", request.post_id))
        })?;

    if request.dir == VOTE_LIKE {
        state
            .votes
            .create(principal.id, post.id)
            .await
            .map_err(|e| match e {
                RepositoryError::AlreadyExists => {
                    Error::Conflict("Post is already liked".to_string())
                }
                other => other.into(),
            })?;

        Ok((
            StatusCode::CREATED,
            Json(json!({ "detail": "Successfully liked the post" })),
        ))
    } else {
        state
            .votes
            .delete(principal.id, post.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => Error::NotFound("Like does not exist".to_string()),
                other => other.into(),
            })?;

        Ok((
            StatusCode::OK,
            Json(json!({ "detail": "Successfully unliked the post" })),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vote_request_deserializes() {
        let request: VoteRequest =
            serde_json::from_str(&format!(r#"{{"post_id": "{}", "dir": 1}}"#, Uuid::new_v4()))
                .unwrap();
        assert_eq!(request.dir, VOTE_LIKE);
    }

    #[test]
    fn test_vote_request_rejects_missing_post_id() {
        let result: std::result::Result<VoteRequest, _> = serde_json::from_str(r#"{"dir": 1}"#);
        assert!(result.is_err());
    }
}
