//! Route definitions for the accounts domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{login, users};
use super::state::AccountsState;

/// Create user management routes
fn user_routes() -> Router<AccountsState> {
    Router::new()
        .route("/users", post(users::create_user).get(users::list_users))
        .route(
            "/users/{id}",
            get(users::get_user)
                .patch(users::update_user)
                .delete(users::delete_user),
        )
}

/// Create login routes
fn login_routes() -> Router<AccountsState> {
    Router::new().route("/login", post(login::login))
}

/// Create all accounts routes
pub fn create_routes() -> Router<AccountsState> {
    Router::new().merge(user_routes()).merge(login_routes())
}
