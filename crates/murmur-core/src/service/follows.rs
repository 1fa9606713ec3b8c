use std::sync::Arc;

use crate::domain::{Follow, User};
use crate::error::{DomainError, RepoError};
use crate::ports::{FollowRepository, UserRepository};

/// Follow edge operations.
pub struct FollowService {
    users: Arc<dyn UserRepository>,
    follows: Arc<dyn FollowRepository>,
}

impl FollowService {
    pub fn new(users: Arc<dyn UserRepository>, follows: Arc<dyn FollowRepository>) -> Self {
        Self { users, follows }
    }

    /// Follow `author_username`. Creating an edge that already exists is
    /// a no-op returning the edge, so the uniqueness constraint never
    /// surfaces to callers. Following yourself is rejected.
    pub async fn follow(&self, user: &str, author_username: &str) -> Result<Follow, DomainError> {
        let user = self.resolve(user).await?;
        let author = self.resolve(author_username).await?;

        if user.id == author.id {
            return Err(DomainError::Validation(
                "users cannot follow themselves".to_string(),
            ));
        }

        if self.follows.exists(user.id, author.id).await? {
            return Ok(Follow::new(user.id, author.id));
        }

        match self.follows.create(Follow::new(user.id, author.id)).await {
            Ok(follow) => Ok(follow),
            // Lost a race against an identical insert; the edge exists
            // either way.
            Err(RepoError::Constraint(_)) => Ok(Follow::new(user.id, author.id)),
            Err(err) => Err(err.into()),
        }
    }

    /// Remove the follow edge towards `author_username`.
    pub async fn unfollow(&self, user: &str, author_username: &str) -> Result<(), DomainError> {
        let user = self.resolve(user).await?;
        let author = self.resolve(author_username).await?;

        if !self.follows.delete(user.id, author.id).await? {
            return Err(DomainError::NotFound(format!(
                "follow of '{author_username}'"
            )));
        }
        Ok(())
    }

    async fn resolve(&self, username: &str) -> Result<User, DomainError> {
        self.users
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user '{username}'")))
    }
}
