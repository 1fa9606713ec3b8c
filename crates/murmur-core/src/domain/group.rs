use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum length of a group title.
pub const MAX_TITLE_LEN: usize = 200;

/// Group entity - a named community that posts can be assigned to.
///
/// Groups are created administratively. The slug is a unique, URL-safe
/// token and is stable once the group exists; only title and description
/// may be edited afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Group {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
}

impl Group {
    /// Create a new group.
    pub fn new(title: String, slug: String, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            slug,
            description,
        }
    }
}
