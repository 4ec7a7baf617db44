//! Posts domain: posts, votes, ownership checks

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{NewPost, Post, PostChanges, Vote};
pub use repository::{PostRepository, VoteRepository};

// Re-export API types
pub use api::routes;
pub use api::PostsState;
