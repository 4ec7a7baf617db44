//! Login API handler
//!
//! **POST /login** accepts form-encoded credentials (OAuth2 password
//! flow shape: the `username` field carries the email) and returns a
//! bearer access token.

use axum::{extract::State, Form, Json};
use bulletin_auth::AuthError;
use serde::{Deserialize, Serialize};

use crate::api::state::AccountsState;

/// Form-encoded login credentials
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    /// Login identifier (email)
    pub username: String,
    pub password: String,
}

/// Successful login response
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
}

/// Authenticate and issue an access token.
///
/// Unknown email and wrong password are indistinguishable: both return
/// 401 with `WWW-Authenticate: Bearer` and the same body.
pub async fn login(
    State(state): State<AccountsState>,
    Form(credentials): Form<LoginRequest>,
) -> Result<Json<TokenResponse>, AuthError> {
    let access_token = state
        .auth
        .login(&credentials.username, &credentials.password)
        .await?;

    Ok(Json(TokenResponse {
        access_token,
        token_type: "bearer",
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_shape() {
        let response = TokenResponse {
            access_token: "abc.def.ghi".to_string(),
            token_type: "bearer",
        };

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["access_token"], "abc.def.ghi");
        assert_eq!(json["token_type"], "bearer");
    }

    #[test]
    fn test_login_request_from_form_encoding() {
        let credentials: LoginRequest =
            serde_urlencoded::from_str("username=alice%40example.com&password=s3cret").unwrap();
        assert_eq!(credentials.username, "alice@example.com");
        assert_eq!(credentials.password, "s3cret");
    }
}
