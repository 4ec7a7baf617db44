pub mod posts;
pub mod votes;

pub use posts::PostRepository;
pub use votes::VoteRepository;
