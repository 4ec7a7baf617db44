//! User management API handlers
//!
//! Registration is public; listing requires authentication; profile
//! mutation is self-only (the ownership guard compares the path id
//! against the authenticated principal).

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use bulletin_auth::{hash_password, CurrentUser};
use bulletin_common::{Error, Pagination, Result, ValidatedJson};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::api::state::AccountsState;
use crate::domain::entities::{NewUser, User, UserChanges};

/// Request for registering a new user
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterUserRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 1, max = 255))]
    pub full_name: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

/// Request for updating a user profile
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: Option<String>,

    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub full_name: Option<String>,

    #[validate(length(min = 8, max = 128))]
    pub password: Option<String>,

    pub is_active: Option<bool>,
}

/// User response for API operations (never includes the password digest)
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub full_name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            full_name: user.full_name,
            is_active: user.is_active,
            created_at: user.created_at,
        }
    }
}

/// Register a new user
///
/// **POST /users**
pub async fn create_user(
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<RegisterUserRequest>,
) -> Result<(StatusCode, Json<UserResponse>)> {
    let new_user = NewUser {
        username: request.username,
        email: request.email,
        full_name: request.full_name,
        hashed_password: hash_password(&request.password),
    };

    let user = state.users.create(&new_user).await.map_err(|e| {
        if matches!(e, bulletin_common::RepositoryError::AlreadyExists) {
            Error::Conflict("Username or email already exists".to_string())
        } else {
            e.into()
        }
    })?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// List users
///
/// **GET /users** (authenticated)
pub async fn list_users(
    CurrentUser(_principal): CurrentUser,
    State(state): State<AccountsState>,
    Query(pagination): Query<Pagination>,
) -> Result<Json<Vec<UserResponse>>> {
    let users = state
        .users
        .list(pagination.offset(), pagination.limit())
        .await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Get a user by id
///
/// **GET /users/{id}**
pub async fn get_user(
    State(state): State<AccountsState>,
    Path(user_id): Path<Uuid>,
) -> Result<Json<UserResponse>> {
    let user = state
        .users
        .get_by_id(user_id)
        .await?
        .ok_or_else(|| Error::NotFound(format!("User with id {} was not found", user_id)))?;

    Ok(Json(user.into()))
}

/// Update a user profile (self-only)
///
/// **PATCH /users/{id}**
pub async fn update_user(
    CurrentUser(principal): CurrentUser,
    State(state): State<AccountsState>,
    Path(user_id): Path<Uuid>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> Result<Json<UserResponse>> {
    principal.ensure_owns(user_id)?;

    let changes = UserChanges {
        username: request.username,
        email: request.email,
        full_name: request.full_name,
        hashed_password: request.password.as_deref().map(hash_password),
        is_active: request.is_active,
    };

    if changes.is_empty() {
        return Err(Error::Validation("No fields to update".to_string()));
    }

    let user = state.users.update(user_id, &changes).await.map_err(|e| {
        if matches!(e, bulletin_common::RepositoryError::AlreadyExists) {
            Error::Conflict("Username or email already exists".to_string())
        } else {
            e.into()
        }
    })?;

    Ok(Json(user.into()))
}

/// Delete a user account (self-only)
///
/// **DELETE /users/{id}**
pub async fn delete_user(
    CurrentUser(principal): CurrentUser,
    State(state): State<AccountsState>,
    Path(user_id): Path<Uuid>,
) -> Result<StatusCode> {
    principal.ensure_owns(user_id)?;

    state.users.delete(user_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
