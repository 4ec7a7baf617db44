//! The authenticated identity attached to a request

use serde::Serialize;
use uuid::Uuid;

use crate::error::AuthError;

/// Represents the authenticated user behind a request.
///
/// Rebuilt fresh from the identity store on every request; never cached
/// across requests.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct Principal {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub is_active: bool,
}

impl Principal {
    /// Check whether this principal owns the given resource
    pub fn owns(&self, owner_id: Uuid) -> bool {
        self.id == owner_id
    }

    /// Ownership guard for mutating operations.
    ///
    /// Permits iff this principal's id matches the resource's owner id;
    /// every other principal is rejected with 403.
    pub fn ensure_owns(&self, owner_id: Uuid) -> Result<(), AuthError> {
        if self.owns(owner_id) {
            Ok(())
        } else {
            Err(AuthError::NotResourceOwner)
        }
    }
}
