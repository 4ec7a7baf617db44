//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database connection URL (PostgreSQL)
    pub database_url: String,

    /// Symmetric secret used to sign and verify access tokens
    pub jwt_secret: String,

    /// Signing algorithm name (HS256 / HS384 / HS512)
    pub jwt_algorithm: String,

    /// Access token time-to-live in minutes
    pub access_token_expire_minutes: i64,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// The secret, algorithm, and TTL are required: the auth core cannot
    /// run without them, so absence is a startup failure rather than a
    /// fallback to an insecure default.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        let config = Self {
            database_url: env::var("DATABASE_URL")
                .map_err(|_| anyhow::anyhow!("DATABASE_URL is required"))?,

            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| anyhow::anyhow!("JWT_SECRET is required"))?,
            jwt_algorithm: env::var("JWT_ALGORITHM")
                .map_err(|_| anyhow::anyhow!("JWT_ALGORITHM is required"))?,
            access_token_expire_minutes: env::var("ACCESS_TOKEN_EXPIRE_MINUTES")
                .map_err(|_| anyhow::anyhow!("ACCESS_TOKEN_EXPIRE_MINUTES is required"))?
                .parse()
                .map_err(|_| {
                    anyhow::anyhow!("ACCESS_TOKEN_EXPIRE_MINUTES must be a positive integer")
                })?,

            rust_log: env::var("RUST_LOG").unwrap_or_else(|_| "bulletin=debug".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        };

        if config.access_token_expire_minutes <= 0 {
            anyhow::bail!("ACCESS_TOKEN_EXPIRE_MINUTES must be a positive integer");
        }

        Ok(config)
    }
}
