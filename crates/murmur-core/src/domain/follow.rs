use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Follow edge - `user_id` follows `author_id`.
///
/// The pair is the identity of the edge; a user cannot follow the same
/// author twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Follow {
    pub user_id: Uuid,
    pub author_id: Uuid,
}

impl Follow {
    pub fn new(user_id: Uuid, author_id: Uuid) -> Self {
        Self { user_id, author_id }
    }
}
