pub mod login;
pub mod users;
