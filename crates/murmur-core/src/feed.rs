//! Feed composition - selecting the ordered posts a viewer sees.

use std::sync::Arc;

use crate::domain::Post;
use crate::error::DomainError;
use crate::ports::{FollowRepository, GroupRepository, PostRepository, UserRepository};

/// Which slice of the post collection a viewer is asking for.
///
/// `Following` carries the viewer's username; an unauthenticated request
/// never reaches composition because there is no viewer to ask with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedView {
    /// Every post.
    All,
    /// Posts assigned to the group with this slug.
    Group(String),
    /// Posts by the author with this username.
    Author(String),
    /// Posts by the authors this viewer follows.
    Following(String),
}

/// Composes post listings for the supported feed views.
///
/// Repositories hand back listings already ordered newest-first, so
/// composition itself is a pure selection step. No deduplication is
/// needed: a post has exactly one author and at most one group.
pub struct FeedComposer {
    users: Arc<dyn UserRepository>,
    groups: Arc<dyn GroupRepository>,
    posts: Arc<dyn PostRepository>,
    follows: Arc<dyn FollowRepository>,
}

impl FeedComposer {
    pub fn new(
        users: Arc<dyn UserRepository>,
        groups: Arc<dyn GroupRepository>,
        posts: Arc<dyn PostRepository>,
        follows: Arc<dyn FollowRepository>,
    ) -> Self {
        Self {
            users,
            groups,
            posts,
            follows,
        }
    }

    /// Produce the ordered post sequence for `view`.
    ///
    /// Fails with `NotFound` when the named group or user does not exist.
    /// A viewer who follows nobody gets an empty sequence.
    pub async fn compose(&self, view: &FeedView) -> Result<Vec<Post>, DomainError> {
        match view {
            FeedView::All => Ok(self.posts.list_all().await?),
            FeedView::Group(slug) => {
                let group = self
                    .groups
                    .find_by_slug(slug)
                    .await?
                    .ok_or_else(|| DomainError::NotFound(format!("group '{slug}'")))?;
                Ok(self.posts.list_by_group(group.id).await?)
            }
            FeedView::Author(username) => {
                let author = self.resolve_user(username).await?;
                Ok(self.posts.list_by_author(author.id).await?)
            }
            FeedView::Following(username) => {
                let viewer = self.resolve_user(username).await?;
                let authors = self.follows.following(viewer.id).await?;
                if authors.is_empty() {
                    return Ok(Vec::new());
                }
                Ok(self.posts.list_by_authors(&authors).await?)
            }
        }
    }

    async fn resolve_user(&self, username: &str) -> Result<crate::domain::User, DomainError> {
        self.users
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user '{username}'")))
    }
}
