//! Data Transfer Objects - request/response types for the API.
//!
//! The acting user is named explicitly in requests; authenticating that
//! name is the job of whatever identity layer sits in front.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use murmur_core::domain::{Comment, Follow, Group, Post, User};
use murmur_core::pagination::Page;

/// Request to register a user reference from the identity subsystem.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
}

/// Request to create a group (administrative).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroupRequest {
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub description: String,
}

/// Request to edit a group's title and description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateGroupRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// Request to create a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub author: String,
    pub text: String,
    /// Slug of the group to assign the post to.
    pub group: Option<String>,
    /// Storage reference to an already-uploaded attachment.
    pub image: Option<String>,
}

/// Request to edit a post. A missing `group` clears the assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub editor: String,
    pub text: String,
    pub group: Option<String>,
}

/// Request to delete a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeletePostRequest {
    pub editor: String,
}

/// Request to comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub author: String,
    pub text: String,
}

/// Request to follow an author.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowRequest {
    pub user: String,
    pub author: String,
}

/// A user's public information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
        }
    }
}

/// A group's public information.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupResponse {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub description: String,
}

impl From<Group> for GroupResponse {
    fn from(group: Group) -> Self {
        Self {
            id: group.id,
            title: group.title,
            slug: group.slug,
            description: group.description,
        }
    }
}

/// A post as returned by feed listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub text: String,
    pub pub_date: DateTime<Utc>,
    pub author_id: Uuid,
    pub group_id: Option<Uuid>,
    pub image: Option<String>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            text: post.text,
            pub_date: post.pub_date,
            author_id: post.author_id,
            group_id: post.group_id,
            image: post.image,
        }
    }
}

/// A comment under a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author_id: Uuid,
    pub text: String,
    pub created: DateTime<Utc>,
}

impl From<Comment> for CommentResponse {
    fn from(comment: Comment) -> Self {
        Self {
            id: comment.id,
            post_id: comment.post_id,
            author_id: comment.author_id,
            text: comment.text,
            created: comment.created,
        }
    }
}

/// A follow edge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowResponse {
    pub user_id: Uuid,
    pub author_id: Uuid,
}

impl From<Follow> for FollowResponse {
    fn from(follow: Follow) -> Self {
        Self {
            user_id: follow.user_id,
            author_id: follow.author_id,
        }
    }
}

/// One page of a feed listing plus navigation metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_items: usize,
    pub total_pages: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

impl From<Page<Post>> for PageResponse<PostResponse> {
    fn from(page: Page<Post>) -> Self {
        Self {
            page: page.number,
            total_items: page.total_items,
            total_pages: page.total_pages,
            has_previous: page.has_previous(),
            has_next: page.has_next(),
            items: page.items.into_iter().map(Into::into).collect(),
        }
    }
}
