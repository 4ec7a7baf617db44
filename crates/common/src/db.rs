//! Shared database types for Bulletin
//!
//! This module provides common database-related types used across domain
//! repositories.

use crate::error::Error;
use thiserror::Error;

/// Postgres error code for unique-constraint violations
const UNIQUE_VIOLATION: &str = "23505";

/// Database-specific error types
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Record not found")]
    NotFound,

    #[error("Record already exists")]
    AlreadyExists,

    #[error("Database connection error: {0}")]
    Connection(sqlx::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<sqlx::Error> for RepositoryError {
    /// Map a raw sqlx error, classifying unique-constraint violations
    /// so callers can surface them as 409 rather than 500.
    fn from(err: sqlx::Error) -> Self {
        if matches!(err, sqlx::Error::RowNotFound) {
            return RepositoryError::NotFound;
        }

        let is_unique_violation = err
            .as_database_error()
            .and_then(|db_err| db_err.code())
            .is_some_and(|code| code == UNIQUE_VIOLATION);

        if is_unique_violation {
            RepositoryError::AlreadyExists
        } else {
            RepositoryError::Connection(err)
        }
    }
}

impl From<RepositoryError> for Error {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => Error::NotFound("Record not found".to_string()),
            RepositoryError::AlreadyExists => Error::Conflict("Record already exists".to_string()),
            RepositoryError::Connection(e) => Error::Database(e),
            RepositoryError::InvalidData(msg) => Error::Validation(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_not_found_maps_to_404() {
        let err: Error = RepositoryError::NotFound.into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_already_exists_maps_to_409() {
        let err: Error = RepositoryError::AlreadyExists.into();
        assert_eq!(err.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_invalid_data_maps_to_400() {
        let err: Error = RepositoryError::InvalidData("bad".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_row_not_found_classified() {
        let err = RepositoryError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, RepositoryError::NotFound));
    }
}
