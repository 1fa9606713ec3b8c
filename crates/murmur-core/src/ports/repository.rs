use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Comment, Follow, Group, Post, User};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
///
/// `insert` and `update` are distinct: inserting an existing id or
/// violating a unique column fails with `RepoError::Constraint`, while
/// updating a missing row fails with `RepoError::NotFound`.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Update an existing entity.
    async fn update(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// User repository. Users are owned by the external identity subsystem;
/// deleting one here cascades to their posts, comments, and follow edges.
#[async_trait]
pub trait UserRepository: BaseRepository<User, Uuid> {
    /// Find a user by their unique username.
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError>;
}

/// Group repository. Inserting a duplicate slug fails with a constraint
/// violation; deleting a group clears the group reference on its posts
/// without deleting them.
#[async_trait]
pub trait GroupRepository: BaseRepository<Group, Uuid> {
    /// Find a group by its unique slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Group>, RepoError>;
}

/// Post repository. Every listing is ordered by `pub_date` descending.
#[async_trait]
pub trait PostRepository: BaseRepository<Post, Uuid> {
    async fn list_all(&self) -> Result<Vec<Post>, RepoError>;

    async fn list_by_group(&self, group_id: Uuid) -> Result<Vec<Post>, RepoError>;

    async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, RepoError>;

    /// Posts by any of the given authors, e.g. the authors a viewer follows.
    async fn list_by_authors(&self, author_ids: &[Uuid]) -> Result<Vec<Post>, RepoError>;
}

/// Comment repository. Per-post listings are ordered by `created`
/// ascending (oldest first, as rendered under a post).
#[async_trait]
pub trait CommentRepository: BaseRepository<Comment, Uuid> {
    async fn list_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError>;
}

/// Follow repository. The `(user, author)` pair is the edge's identity;
/// creating a duplicate pair fails with a constraint violation.
#[async_trait]
pub trait FollowRepository: Send + Sync {
    async fn create(&self, follow: Follow) -> Result<Follow, RepoError>;

    /// Remove the edge. Returns `Ok(false)` when no edge existed.
    async fn delete(&self, user_id: Uuid, author_id: Uuid) -> Result<bool, RepoError>;

    async fn exists(&self, user_id: Uuid, author_id: Uuid) -> Result<bool, RepoError>;

    /// Ids of the authors `user_id` follows.
    async fn following(&self, user_id: Uuid) -> Result<Vec<Uuid>, RepoError>;
}
