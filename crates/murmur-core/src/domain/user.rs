use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque reference to a user owned by the external identity subsystem.
///
/// The core only ever needs the stable id and the unique username; every
/// other identity field (credentials, profile, sessions) lives elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
}

impl User {
    /// Create a new user reference with a generated ID.
    pub fn new(username: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
        }
    }
}
