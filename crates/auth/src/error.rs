//! Authentication errors

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Authentication error
///
/// The variants distinguish failure causes for logging; the rendered
/// responses deliberately do not. Every token-path 401 carries the same
/// code and message so expiry, bad signature, and unknown subject are
/// indistinguishable from outside, and login failures never reveal
/// whether the identifier or the password was wrong.
#[derive(Debug)]
pub enum AuthError {
    MissingAuthorization,
    InvalidAuthorizationFormat,
    InvalidToken,
    InvalidCredentials,
    UserNotFound,
    UserLoadError,
    TokenCreationFailed,
    /// Authenticated but not the owner of the target resource
    NotResourceOwner,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            AuthError::MissingAuthorization => (
                StatusCode::UNAUTHORIZED,
                "MISSING_AUTHORIZATION",
                "Authorization header required",
            ),
            AuthError::InvalidAuthorizationFormat => (
                StatusCode::UNAUTHORIZED,
                "INVALID_AUTHORIZATION",
                "Invalid authorization header format",
            ),
            // InvalidToken and UserNotFound render identically: a token
            // for a deleted user must not be distinguishable from a bad
            // token.
            AuthError::InvalidToken | AuthError::UserNotFound => (
                StatusCode::UNAUTHORIZED,
                "INVALID_TOKEN",
                "Could not validate credentials",
            ),
            AuthError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                "INVALID_CREDENTIALS",
                "Invalid credentials",
            ),
            AuthError::UserLoadError => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "USER_LOAD_ERROR",
                "Failed to load user",
            ),
            AuthError::TokenCreationFailed => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "TOKEN_CREATION_FAILED",
                "Failed to create access token",
            ),
            AuthError::NotResourceOwner => (
                StatusCode::FORBIDDEN,
                "NOT_RESOURCE_OWNER",
                "Not authorized to perform requested action",
            ),
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        let mut response = (status, body).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

impl From<AuthError> for bulletin_common::Error {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingAuthorization
            | AuthError::InvalidAuthorizationFormat
            | AuthError::InvalidToken
            | AuthError::InvalidCredentials
            | AuthError::UserNotFound => {
                bulletin_common::Error::Authentication("Could not validate credentials".to_string())
            }
            AuthError::NotResourceOwner => bulletin_common::Error::Authorization(
                "Not authorized to perform requested action".to_string(),
            ),
            AuthError::UserLoadError => {
                bulletin_common::Error::Internal("Failed to load user".to_string())
            }
            AuthError::TokenCreationFailed => {
                bulletin_common::Error::Internal("Failed to create access token".to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_error_status_codes() {
        let cases: Vec<(AuthError, StatusCode)> = vec![
            (AuthError::MissingAuthorization, StatusCode::UNAUTHORIZED),
            (
                AuthError::InvalidAuthorizationFormat,
                StatusCode::UNAUTHORIZED,
            ),
            (AuthError::InvalidToken, StatusCode::UNAUTHORIZED),
            (AuthError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (AuthError::UserNotFound, StatusCode::UNAUTHORIZED),
            (AuthError::UserLoadError, StatusCode::INTERNAL_SERVER_ERROR),
            (
                AuthError::TokenCreationFailed,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (AuthError::NotResourceOwner, StatusCode::FORBIDDEN),
        ];

        for (error, expected_status) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[test]
    fn test_unauthorized_carries_www_authenticate() {
        let response = AuthError::InvalidToken.into_response();
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );

        let response = AuthError::InvalidCredentials.into_response();
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_forbidden_has_no_www_authenticate() {
        let response = AuthError::NotResourceOwner.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert!(response.headers().get(header::WWW_AUTHENTICATE).is_none());
    }

    #[tokio::test]
    async fn test_invalid_token_and_missing_user_render_identically() {
        let a = AuthError::InvalidToken.into_response();
        let b = AuthError::UserNotFound.into_response();

        assert_eq!(a.status(), b.status());
        let a_body = axum::body::to_bytes(a.into_body(), usize::MAX).await.unwrap();
        let b_body = axum::body::to_bytes(b.into_body(), usize::MAX).await.unwrap();
        assert_eq!(a_body, b_body);
    }
}
