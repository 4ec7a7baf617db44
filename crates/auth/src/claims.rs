//! JWT claims types

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access token claim set.
///
/// A closed struct rather than an open-ended map: these are exactly the
/// fields the service relies on, and deserialization rejects tokens
/// missing any of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user ID)
    pub user_id: Uuid,
    /// Display identifier
    pub username: String,
    /// Issued at (seconds since epoch)
    pub iat: u64,
    /// Expires at (seconds since epoch)
    pub exp: u64,
}
