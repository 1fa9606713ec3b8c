use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Group, MAX_TITLE_LEN};
use crate::error::DomainError;
use crate::ports::GroupRepository;

/// Administrative group operations.
pub struct GroupService {
    groups: Arc<dyn GroupRepository>,
}

impl GroupService {
    pub fn new(groups: Arc<dyn GroupRepository>) -> Self {
        Self { groups }
    }

    /// Create a group. The slug must be a non-empty URL-safe token and
    /// unique across all groups.
    pub async fn create_group(
        &self,
        title: &str,
        slug: &str,
        description: &str,
    ) -> Result<Group, DomainError> {
        validate_title(title)?;
        validate_slug(slug)?;

        let group = Group::new(
            title.to_string(),
            slug.to_string(),
            description.to_string(),
        );
        tracing::debug!(group_id = %group.id, slug = %group.slug, "Creating group");
        Ok(self.groups.insert(group).await?)
    }

    /// Edit a group's title and description. The slug is stable once the
    /// group exists.
    pub async fn update_group(
        &self,
        group_id: Uuid,
        title: &str,
        description: &str,
    ) -> Result<Group, DomainError> {
        validate_title(title)?;
        let mut group = self.resolve(group_id).await?;

        group.title = title.to_string();
        group.description = description.to_string();
        Ok(self.groups.update(group).await?)
    }

    /// Delete a group. Posts assigned to it survive with their group
    /// reference cleared.
    pub async fn delete_group(&self, group_id: Uuid) -> Result<(), DomainError> {
        let group = self.resolve(group_id).await?;
        tracing::debug!(group_id = %group.id, "Deleting group");
        Ok(self.groups.delete(group.id).await?)
    }

    async fn resolve(&self, group_id: Uuid) -> Result<Group, DomainError> {
        self.groups
            .find_by_id(group_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("group {group_id}")))
    }
}

fn validate_title(title: &str) -> Result<(), DomainError> {
    if title.chars().count() > MAX_TITLE_LEN {
        return Err(DomainError::Validation(format!(
            "group title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

fn validate_slug(slug: &str) -> Result<(), DomainError> {
    let url_safe = !slug.is_empty()
        && slug
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    if !url_safe {
        return Err(DomainError::Validation(
            "group slug must be a non-empty URL-safe token".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slug_validation_accepts_url_safe_tokens() {
        assert!(validate_slug("rust-lang_2024").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("no spaces").is_err());
        assert!(validate_slug("no/slash").is_err());
    }

    #[test]
    fn title_validation_enforces_max_length() {
        assert!(validate_title(&"x".repeat(MAX_TITLE_LEN)).is_ok());
        assert!(validate_title(&"x".repeat(MAX_TITLE_LEN + 1)).is_err());
    }
}
