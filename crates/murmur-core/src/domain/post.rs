use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a publication owned exclusively by its author.
///
/// Listings are always ordered by `pub_date` descending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub text: String,
    /// Stamped at creation and never changed afterwards.
    pub pub_date: DateTime<Utc>,
    pub author_id: Uuid,
    /// Optional group assignment; cleared when the group is deleted.
    pub group_id: Option<Uuid>,
    /// Storage reference to an uploaded attachment, if any.
    pub image: Option<String>,
}

impl Post {
    /// Create a new post.
    pub fn new(
        author_id: Uuid,
        text: String,
        group_id: Option<Uuid>,
        image: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            text,
            pub_date: Utc::now(),
            author_id,
            group_id,
            image,
        }
    }
}
