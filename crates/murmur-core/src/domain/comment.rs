use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Comment entity - attached to a post, owned by its author.
///
/// Comments are immutable once created and disappear with either the post
/// or the author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub text: String,
    /// Stamped at creation and never changed afterwards.
    pub created: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment.
    pub fn new(post_id: Uuid, author_id: Uuid, text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            post_id,
            author_id,
            text,
            created: Utc::now(),
        }
    }
}
