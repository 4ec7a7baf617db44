pub mod posts;
pub mod votes;
