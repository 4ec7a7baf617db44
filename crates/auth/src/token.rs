//! Access token encoding and validation

use axum::http::HeaderValue;
use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation,
};

use crate::claims::AccessClaims;
use crate::config::AuthConfig;
use crate::error::AuthError;
use uuid::Uuid;

/// Internal token failure classification.
///
/// The expired/invalid split exists for logging only; both surface to
/// callers as the same unauthorized outcome.
#[derive(Debug, PartialEq, Eq)]
pub enum TokenError {
    /// Bad signature, algorithm mismatch, or structurally malformed token
    Invalid,
    /// Signature valid but the embedded expiry has passed
    Expired,
}

/// Signs and validates access tokens with a single symmetric secret.
///
/// Pure computation: issuing and decoding perform no I/O.
#[derive(Clone)]
pub struct TokenCodec {
    header: Header,
    validation: Validation,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    default_ttl: Duration,
}

impl TokenCodec {
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(config.algorithm);
        validation.validate_aud = false;
        // The default 60s leeway would accept tokens past their expiry;
        // the expiry embedded in the claims is the only lifetime control
        // this service has, so it is enforced exactly.
        validation.leeway = 0;

        Self {
            header: Header::new(config.algorithm),
            validation,
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_ref()),
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_ref()),
            default_ttl: Duration::minutes(config.access_token_expire_minutes),
        }
    }

    /// Issue a token for a subject using the configured default TTL
    pub fn issue(&self, user_id: Uuid, username: &str) -> Result<String, TokenError> {
        self.issue_with_ttl(user_id, username, self.default_ttl)
    }

    /// Issue a token expiring at `now_utc + ttl`
    pub fn issue_with_ttl(
        &self,
        user_id: Uuid,
        username: &str,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = AccessClaims {
            user_id,
            username: username.to_string(),
            iat: now.timestamp() as u64,
            exp: (now + ttl).timestamp() as u64,
        };

        encode(&self.header, &claims, &self.encoding_key).map_err(|e| {
            tracing::error!(error = %e, "failed to sign access token");
            TokenError::Invalid
        })
    }

    /// Decode and validate a token: signature, algorithm, and expiry
    pub fn decode(&self, token: &str) -> Result<AccessClaims, TokenError> {
        let token_data =
            decode::<AccessClaims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                tracing::debug!(error = %e, "token validation failed");
                match e.kind() {
                    ErrorKind::ExpiredSignature => TokenError::Expired,
                    _ => TokenError::Invalid,
                }
            })?;

        Ok(token_data.claims)
    }
}

/// Extract the bearer token from an Authorization header
pub(crate) fn extract_bearer_token(header: &HeaderValue) -> Result<&str, AuthError> {
    let header_str = header
        .to_str()
        .map_err(|_| AuthError::InvalidAuthorizationFormat)?;

    header_str
        .strip_prefix("Bearer ")
        .ok_or(AuthError::InvalidAuthorizationFormat)
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::Algorithm;

    fn test_config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            algorithm: Algorithm::HS256,
            access_token_expire_minutes: 30,
        }
    }

    #[test]
    fn test_issue_decode_roundtrip() {
        let codec = TokenCodec::new(&test_config("roundtrip-secret"));
        let user_id = Uuid::new_v4();

        let token = codec.issue(user_id, "alice").expect("issue failed");
        let claims = codec.decode(&token).expect("decode failed");

        assert_eq!(claims.user_id, user_id);
        assert_eq!(claims.username, "alice");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_expiry_is_set_from_ttl() {
        let codec = TokenCodec::new(&test_config("ttl-secret"));
        let before = Utc::now().timestamp() as u64;

        let token = codec
            .issue_with_ttl(Uuid::new_v4(), "alice", Duration::minutes(5))
            .unwrap();
        let claims = codec.decode(&token).unwrap();

        // Expiry lands within a second of now + 5 minutes
        assert!(claims.exp >= before + 299);
        assert!(claims.exp <= before + 302);
    }

    #[test]
    fn test_expired_token_rejected() {
        let codec = TokenCodec::new(&test_config("expiry-secret"));

        let token = codec
            .issue_with_ttl(Uuid::new_v4(), "alice", Duration::minutes(-5))
            .unwrap();

        assert_eq!(codec.decode(&token), Err(TokenError::Expired));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = TokenCodec::new(&test_config("secret-a"));
        let verifier = TokenCodec::new(&test_config("secret-b"));

        let token = issuer.issue(Uuid::new_v4(), "alice").unwrap();

        assert_eq!(verifier.decode(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn test_algorithm_mismatch_rejected() {
        let issuer = TokenCodec::new(&AuthConfig {
            jwt_secret: "shared-secret".to_string(),
            algorithm: Algorithm::HS512,
            access_token_expire_minutes: 30,
        });
        let verifier = TokenCodec::new(&test_config("shared-secret"));

        let token = issuer.issue(Uuid::new_v4(), "alice").unwrap();

        assert_eq!(verifier.decode(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn test_malformed_token_rejected() {
        let codec = TokenCodec::new(&test_config("malformed-secret"));

        assert_eq!(codec.decode("not-a-jwt"), Err(TokenError::Invalid));
        assert_eq!(codec.decode(""), Err(TokenError::Invalid));
        assert_eq!(codec.decode("a.b.c"), Err(TokenError::Invalid));
    }

    #[test]
    fn test_missing_subject_claim_rejected() {
        // A signed token whose payload lacks user_id must fail decode,
        // not produce a partially-populated claim set.
        let config = test_config("subject-secret");
        let codec = TokenCodec::new(&config);

        #[derive(serde::Serialize)]
        struct NoSubject {
            username: String,
            iat: u64,
            exp: u64,
        }
        let now = Utc::now().timestamp() as u64;
        let token = encode(
            &Header::new(Algorithm::HS256),
            &NoSubject {
                username: "alice".to_string(),
                iat: now,
                exp: now + 600,
            },
            &EncodingKey::from_secret(config.jwt_secret.as_ref()),
        )
        .unwrap();

        assert_eq!(codec.decode(&token), Err(TokenError::Invalid));
    }

    #[test]
    fn test_extract_bearer_token() {
        // Valid bearer token
        let header = HeaderValue::from_static("Bearer abc123");
        assert_eq!(extract_bearer_token(&header).unwrap(), "abc123");

        // Missing scheme
        let header = HeaderValue::from_static("abc123");
        assert!(extract_bearer_token(&header).is_err());

        // Wrong scheme
        let header = HeaderValue::from_static("Basic abc123");
        assert!(extract_bearer_token(&header).is_err());
    }
}
