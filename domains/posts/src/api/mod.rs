pub mod handlers;
pub mod routes;
pub mod state;

pub use state::PostsState;
