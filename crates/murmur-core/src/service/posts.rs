use std::sync::Arc;

use uuid::Uuid;

use crate::domain::{Comment, Post, User};
use crate::error::DomainError;
use crate::ports::{CommentRepository, GroupRepository, PostRepository, UserRepository};

/// Post lifecycle operations.
///
/// The author-only rule for edits and deletes lives here, not in the
/// presentation layer: a caller that is not the author gets `Forbidden`
/// no matter which surface invoked the operation.
pub struct PostService {
    users: Arc<dyn UserRepository>,
    groups: Arc<dyn GroupRepository>,
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
}

impl PostService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        groups: Arc<dyn GroupRepository>,
        posts: Arc<dyn PostRepository>,
        comments: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            users,
            groups,
            posts,
            comments,
        }
    }

    /// Create a post for `author`, optionally assigned to the group named
    /// by `group_slug`.
    pub async fn create_post(
        &self,
        author: &str,
        text: &str,
        group_slug: Option<&str>,
        image: Option<String>,
    ) -> Result<Post, DomainError> {
        require_text(text, "post")?;
        let author = self.resolve_user(author).await?;
        let group_id = self.resolve_group(group_slug).await?;

        let post = Post::new(author.id, text.to_string(), group_id, image);
        tracing::debug!(post_id = %post.id, author = %author.username, "Creating post");
        Ok(self.posts.insert(post).await?)
    }

    /// Update a post's text and group assignment. Only the author may
    /// edit; a missing `group_slug` clears the assignment. `pub_date`
    /// and authorship are immutable.
    pub async fn update_post(
        &self,
        post_id: Uuid,
        editor: &str,
        text: &str,
        group_slug: Option<&str>,
    ) -> Result<Post, DomainError> {
        require_text(text, "post")?;
        let editor = self.resolve_user(editor).await?;
        let mut post = self.resolve_post(post_id).await?;
        self.require_author(&post, &editor, "edit")?;

        post.text = text.to_string();
        post.group_id = self.resolve_group(group_slug).await?;
        Ok(self.posts.update(post).await?)
    }

    /// Delete a post. Only the author may delete; the post's comments go
    /// with it.
    pub async fn delete_post(&self, post_id: Uuid, editor: &str) -> Result<(), DomainError> {
        let editor = self.resolve_user(editor).await?;
        let post = self.resolve_post(post_id).await?;
        self.require_author(&post, &editor, "delete")?;

        tracing::debug!(post_id = %post.id, "Deleting post");
        Ok(self.posts.delete(post.id).await?)
    }

    /// Attach a comment to a post.
    pub async fn add_comment(
        &self,
        post_id: Uuid,
        author: &str,
        text: &str,
    ) -> Result<Comment, DomainError> {
        require_text(text, "comment")?;
        let author = self.resolve_user(author).await?;
        let post = self.resolve_post(post_id).await?;

        let comment = Comment::new(post.id, author.id, text.to_string());
        Ok(self.comments.insert(comment).await?)
    }

    /// Comments under a post, oldest first.
    pub async fn comments(&self, post_id: Uuid) -> Result<Vec<Comment>, DomainError> {
        let post = self.resolve_post(post_id).await?;
        Ok(self.comments.list_by_post(post.id).await?)
    }

    async fn resolve_user(&self, username: &str) -> Result<User, DomainError> {
        self.users
            .find_by_username(username)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("user '{username}'")))
    }

    async fn resolve_post(&self, post_id: Uuid) -> Result<Post, DomainError> {
        self.posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("post {post_id}")))
    }

    async fn resolve_group(&self, slug: Option<&str>) -> Result<Option<Uuid>, DomainError> {
        match slug {
            Some(slug) => {
                let group = self
                    .groups
                    .find_by_slug(slug)
                    .await?
                    .ok_or_else(|| DomainError::NotFound(format!("group '{slug}'")))?;
                Ok(Some(group.id))
            }
            None => Ok(None),
        }
    }

    fn require_author(&self, post: &Post, editor: &User, action: &str) -> Result<(), DomainError> {
        if post.author_id != editor.id {
            return Err(DomainError::Forbidden(format!(
                "only the author may {action} a post"
            )));
        }
        Ok(())
    }
}

fn require_text(text: &str, what: &str) -> Result<(), DomainError> {
    if text.trim().is_empty() {
        return Err(DomainError::Validation(format!(
            "{what} text must not be empty"
        )));
    }
    Ok(())
}
