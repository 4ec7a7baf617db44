//! Concrete authentication backend
//!
//! Wraps `PgPool` + `AuthConfig` and owns auth-specific SQL queries.
//! Uses runtime `sqlx::query_as` (not macros) so builds stay independent
//! of a live database.

use sqlx::PgPool;
use uuid::Uuid;

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::password::verify_password;
use crate::principal::Principal;
use crate::token::TokenCodec;

/// Row type for the login-time credential lookup (includes the stored
/// password digest for verification)
#[derive(sqlx::FromRow)]
struct CredentialRow {
    id: Uuid,
    username: String,
    hashed_password: String,
}

/// Concrete authentication backend.
///
/// Wraps a database pool and the token codec. Resolves principals from
/// bearer tokens and runs the login flow.
///
/// Domain states expose this via `FromRef`:
/// ```ignore
/// impl FromRef<MyDomainState> for AuthBackend {
///     fn from_ref(state: &MyDomainState) -> Self {
///         state.auth.clone()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct AuthBackend {
    pool: PgPool,
    codec: TokenCodec,
}

impl AuthBackend {
    pub fn new(pool: PgPool, config: &AuthConfig) -> Self {
        Self {
            pool,
            codec: TokenCodec::new(config),
        }
    }

    pub fn codec(&self) -> &TokenCodec {
        &self.codec
    }

    /// Resolve the principal behind a bearer token.
    ///
    /// Decode failures (bad signature, expired, malformed) and an unknown
    /// subject id all collapse into the same unauthorized outcome; the
    /// identity is re-loaded on every request, never cached.
    pub async fn authenticate(&self, token: &str) -> Result<Principal, AuthError> {
        let claims = self
            .codec
            .decode(token)
            .map_err(|_| AuthError::InvalidToken)?;

        let principal = self
            .find_user(claims.user_id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        Ok(principal)
    }

    /// Login flow: credential lookup, digest verification, token issuance.
    ///
    /// An unknown email and a wrong password produce the identical
    /// `InvalidCredentials` outcome to prevent user enumeration.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, AuthError> {
        let credential = self
            .find_credentials(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(password, &credential.hashed_password) {
            return Err(AuthError::InvalidCredentials);
        }

        self.codec
            .issue(credential.id, &credential.username)
            .map_err(|_| AuthError::TokenCreationFailed)
    }

    /// Find the principal identity by subject id
    async fn find_user(&self, id: Uuid) -> Result<Option<Principal>, AuthError> {
        let principal: Option<Principal> = sqlx::query_as(
            r#"
            SELECT id, username, email, is_active
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, user_id = %id, "Failed to load user");
            AuthError::UserLoadError
        })?;

        Ok(principal)
    }

    /// Find the stored credential record by login identifier (email)
    async fn find_credentials(&self, email: &str) -> Result<Option<CredentialRow>, AuthError> {
        let credential: Option<CredentialRow> = sqlx::query_as(
            r#"
            SELECT id, username, hashed_password
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Failed to load credentials");
            AuthError::UserLoadError
        })?;

        Ok(credential)
    }
}
