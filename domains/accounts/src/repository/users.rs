//! User repository

use crate::domain::entities::{NewUser, User, UserChanges};
use bulletin_common::RepositoryError;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new user.
    ///
    /// Username and email carry unique constraints; violations surface as
    /// `AlreadyExists`.
    pub async fn create(&self, new_user: &NewUser) -> Result<User, RepositoryError> {
        let user: User = sqlx::query_as(
            r#"
            INSERT INTO users (username, email, full_name, hashed_password)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, email, full_name, hashed_password, is_active, created_at
            "#,
        )
        .bind(&new_user.username)
        .bind(&new_user.email)
        .bind(&new_user.full_name)
        .bind(&new_user.hashed_password)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find user by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<User>, RepositoryError> {
        let user: Option<User> = sqlx::query_as(
            r#"
            SELECT id, username, email, full_name, hashed_password, is_active, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// List users, newest first
    pub async fn list(&self, offset: i64, limit: i64) -> Result<Vec<User>, RepositoryError> {
        let users: Vec<User> = sqlx::query_as(
            r#"
            SELECT id, username, email, full_name, hashed_password, is_active, created_at
            FROM users
            ORDER BY created_at DESC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// Apply a partial update; absent fields are left as stored
    pub async fn update(&self, id: Uuid, changes: &UserChanges) -> Result<User, RepositoryError> {
        let user: Option<User> = sqlx::query_as(
            r#"
            UPDATE users
            SET username        = COALESCE($2, username),
                email           = COALESCE($3, email),
                full_name       = COALESCE($4, full_name),
                hashed_password = COALESCE($5, hashed_password),
                is_active       = COALESCE($6, is_active)
            WHERE id = $1
            RETURNING id, username, email, full_name, hashed_password, is_active, created_at
            "#,
        )
        .bind(id)
        .bind(&changes.username)
        .bind(&changes.email)
        .bind(&changes.full_name)
        .bind(&changes.hashed_password)
        .bind(changes.is_active)
        .fetch_optional(&self.pool)
        .await?;

        user.ok_or(RepositoryError::NotFound)
    }

    /// Delete a user by ID
    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
