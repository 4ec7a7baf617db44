//! Authentication configuration

use jsonwebtoken::Algorithm;

/// Authentication configuration
///
/// Built once at startup and passed explicitly to the token codec and
/// auth backend; never read from ambient global state.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub algorithm: Algorithm,
    pub access_token_expire_minutes: i64,
}

/// Parse a configured algorithm name into a signing algorithm.
///
/// Only the symmetric HMAC family is accepted: this service does
/// single-secret verification, and admitting an asymmetric name here
/// would silently break signature checks.
pub fn parse_algorithm(name: &str) -> Result<Algorithm, UnsupportedAlgorithm> {
    match name {
        "HS256" => Ok(Algorithm::HS256),
        "HS384" => Ok(Algorithm::HS384),
        "HS512" => Ok(Algorithm::HS512),
        other => Err(UnsupportedAlgorithm(other.to_string())),
    }
}

/// Error for unknown or non-HMAC algorithm names in configuration
#[derive(Debug, thiserror::Error)]
#[error("unsupported JWT algorithm: {0} (expected HS256, HS384, or HS512)")]
pub struct UnsupportedAlgorithm(pub String);
