//! Route definitions for the posts domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{posts, votes};
use super::state::PostsState;

/// Create post management routes
fn post_routes() -> Router<PostsState> {
    Router::new()
        .route("/posts", post(posts::create_post).get(posts::list_posts))
        .route("/posts/mine", get(posts::list_my_posts))
        .route(
            "/posts/{id}",
            get(posts::get_post)
                .patch(posts::update_post)
                .delete(posts::delete_post),
        )
}

/// Create vote routes
fn vote_routes() -> Router<PostsState> {
    Router::new().route("/vote", post(votes::vote))
}

/// Create all posts routes
pub fn create_routes() -> Router<PostsState> {
    Router::new().merge(post_routes()).merge(vote_routes())
}
