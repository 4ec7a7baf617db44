//! Authentication core for the Bulletin API
//!
//! Provides JWT issuance and validation, password hashing, principal
//! resolution, and axum extractors that work with any domain state
//! implementing `FromRef<S>` for `AuthBackend`.

mod backend;
mod claims;
mod config;
mod error;
mod extractors;
mod password;
mod principal;
mod token;

pub use backend::AuthBackend;
pub use claims::AccessClaims;
pub use config::{parse_algorithm, AuthConfig, UnsupportedAlgorithm};
pub use error::AuthError;
pub use extractors::CurrentUser;
pub use password::{hash_password, verify_password};
pub use principal::Principal;
pub use token::{TokenCodec, TokenError};
