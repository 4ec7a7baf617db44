//! Posts domain state and auth backend integration

use crate::repository::{PostRepository, VoteRepository};
use axum::extract::FromRef;
use bulletin_auth::AuthBackend;

/// Application state for the posts domain
#[derive(Clone)]
pub struct PostsState {
    pub posts: PostRepository,
    pub votes: VoteRepository,
    pub auth: AuthBackend,
}

impl FromRef<PostsState> for AuthBackend {
    fn from_ref(state: &PostsState) -> Self {
        state.auth.clone()
    }
}
