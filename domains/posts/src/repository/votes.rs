//! Vote repository
//!
//! A vote row exists only for likes; the primary key on
//! `(user_id, post_id)` makes the duplicate-like case a database
//! unique violation rather than a read-then-write race.

use bulletin_common::RepositoryError;
use sqlx::PgPool;
use uuid::Uuid;

#[derive(Clone)]
pub struct VoteRepository {
    pool: PgPool,
}

impl VoteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a like.
    ///
    /// A second like for the same `(user, post)` pair surfaces as
    /// `AlreadyExists`.
    pub async fn create(&self, user_id: Uuid, post_id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"
            INSERT INTO votes (user_id, post_id)
            VALUES ($1, $2)
            "#,
        )
        .bind(user_id)
        .bind(post_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Remove a like.
    ///
    /// Unliking when no like exists surfaces as `NotFound`.
    pub async fn delete(&self, user_id: Uuid, post_id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            DELETE FROM votes
            WHERE user_id = $1 AND post_id = $2
            "#,
        )
        .bind(user_id)
        .bind(post_id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
