//! Post repository

use crate::domain::entities::{NewPost, Post, PostChanges};
use bulletin_common::RepositoryError;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct PostRepository {
    pool: PgPool,
}

impl PostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new post
    pub async fn create(&self, new_post: &NewPost) -> Result<Post, RepositoryError> {
        let post: Post = sqlx::query_as(
            r#"
            INSERT INTO posts (owner_id, title, content, published)
            VALUES ($1, $2, $3, $4)
            RETURNING id, owner_id, title, content, published, created_at
            "#,
        )
        .bind(new_post.owner_id)
        .bind(&new_post.title)
        .bind(&new_post.content)
        .bind(new_post.published)
        .fetch_one(&self.pool)
        .await?;

        Ok(post)
    }

    /// Find post by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Post>, RepositoryError> {
        let post: Option<Post> = sqlx::query_as(
            r#"
            SELECT id, owner_id, title, content, published, created_at
            FROM posts
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(post)
    }

    /// List posts, newest first
    pub async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Post>, RepositoryError> {
        let posts: Vec<Post> = sqlx::query_as(
            r#"
            SELECT id, owner_id, title, content, published, created_at
            FROM posts
            ORDER BY created_at DESC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    /// List posts owned by one user, newest first.
    ///
    /// The owner filter is a query predicate, not a post-hoc permission
    /// check.
    pub async fn list_by_owner(
        &self,
        owner_id: Uuid,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Post>, RepositoryError> {
        let posts: Vec<Post> = sqlx::query_as(
            r#"
            SELECT id, owner_id, title, content, published, created_at
            FROM posts
            WHERE owner_id = $1
            ORDER BY created_at DESC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(owner_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(posts)
    }

    /// Apply a partial update; absent fields are left as stored
    pub async fn update(&self, id: Uuid, changes: &PostChanges) -> Result<Post, RepositoryError> {
        let post: Option<Post> = sqlx::query_as(
            r#"
            UPDATE posts
            SET title     = COALESCE($2, title),
                content   = COALESCE($3, content),
                published = COALESCE($4, published)
            WHERE id = $1
            RETURNING id, owner_id, title, content, published, created_at
            "#,
        )
        .bind(id)
        .bind(&changes.title)
        .bind(&changes.content)
        .bind(changes.published)
        .fetch_optional(&self.pool)
        .await?;

        post.ok_or(RepositoryError::NotFound)
    }

    /// Delete a post by ID
    pub async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
