//! HTTP API assembly for Bulletin

use axum::Router;
use bulletin_accounts::{AccountsState, UserRepository};
use bulletin_auth::{parse_algorithm, AuthBackend, AuthConfig};
use bulletin_common::config::Config;
use bulletin_posts::{PostRepository, PostsState, VoteRepository};
use sqlx::PgPool;

/// Embedded database migrations
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Create the main application router with all routes and state
pub fn create_app(config: &Config, pool: PgPool) -> Result<Router, anyhow::Error> {
    // Secret, algorithm, and TTL are loaded once here and passed in;
    // the auth core never reads the environment itself.
    let auth_config = AuthConfig {
        jwt_secret: config.jwt_secret.clone(),
        algorithm: parse_algorithm(&config.jwt_algorithm)?,
        access_token_expire_minutes: config.access_token_expire_minutes,
    };
    let auth = AuthBackend::new(pool.clone(), &auth_config);

    let accounts_state = AccountsState {
        users: UserRepository::new(pool.clone()),
        auth: auth.clone(),
    };

    let posts_state = PostsState {
        posts: PostRepository::new(pool.clone()),
        votes: VoteRepository::new(pool),
        auth,
    };

    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route("/", axum::routing::get(|| async { "Bulletin API v0.1.0" }))
        .merge(bulletin_accounts::routes::create_routes().with_state(accounts_state))
        .merge(bulletin_posts::routes::create_routes().with_state(posts_state));

    Ok(app)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_check() {
        assert_eq!(health_check().await, "OK");
    }

    #[test]
    fn test_unknown_algorithm_is_a_startup_error() {
        assert!(parse_algorithm("ES256").is_err());
    }
}
