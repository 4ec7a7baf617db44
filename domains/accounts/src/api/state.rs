//! Accounts domain state and auth backend integration

use crate::repository::UserRepository;
use axum::extract::FromRef;
use bulletin_auth::AuthBackend;

/// Application state for the accounts domain
#[derive(Clone)]
pub struct AccountsState {
    pub users: UserRepository,
    pub auth: AuthBackend,
}

impl FromRef<AccountsState> for AuthBackend {
    fn from_ref(state: &AccountsState) -> Self {
        state.auth.clone()
    }
}
