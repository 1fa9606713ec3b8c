//! Port implementations as thin views over [`MemoryStore`].
//!
//! Cascade behavior mirrors the relational schema in `apps/migration`:
//! deleting a user removes their posts (and those posts' comments), their
//! own comments, and every follow edge they are part of; deleting a group
//! clears the group reference on its posts; deleting a post removes its
//! comments.

use std::collections::HashSet;

use async_trait::async_trait;
use uuid::Uuid;

use murmur_core::domain::{Comment, Follow, Group, Post, User};
use murmur_core::error::RepoError;
use murmur_core::ports::{
    BaseRepository, CommentRepository, FollowRepository, GroupRepository, PostRepository,
    UserRepository,
};

use super::store::MemoryStore;

fn by_pub_date_desc(mut posts: Vec<Post>) -> Vec<Post> {
    posts.sort_by(|a, b| b.pub_date.cmp(&a.pub_date));
    posts
}

/// In-memory user repository.
pub struct InMemoryUserRepository {
    store: MemoryStore,
}

impl InMemoryUserRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BaseRepository<User, Uuid> for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables.users.get(&id).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, RepoError> {
        let mut tables = self.store.tables.write().await;
        if tables.users.contains_key(&user.id) {
            return Err(RepoError::Constraint(format!(
                "user {} already exists",
                user.id
            )));
        }
        if tables.users.values().any(|u| u.username == user.username) {
            return Err(RepoError::Constraint(format!(
                "username '{}' already exists",
                user.username
            )));
        }
        tables.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn update(&self, user: User) -> Result<User, RepoError> {
        let mut tables = self.store.tables.write().await;
        match tables.users.get_mut(&user.id) {
            Some(slot) => {
                *slot = user.clone();
                Ok(user)
            }
            None => Err(RepoError::NotFound),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut tables = self.store.tables.write().await;
        if tables.users.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }

        let removed_posts: HashSet<Uuid> = tables
            .posts
            .values()
            .filter(|p| p.author_id == id)
            .map(|p| p.id)
            .collect();
        tables.posts.retain(|_, p| p.author_id != id);
        tables
            .comments
            .retain(|_, c| c.author_id != id && !removed_posts.contains(&c.post_id));
        tables
            .follows
            .retain(|f| f.user_id != id && f.author_id != id);
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|u| u.username == username)
            .cloned())
    }
}

/// In-memory group repository.
pub struct InMemoryGroupRepository {
    store: MemoryStore,
}

impl InMemoryGroupRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BaseRepository<Group, Uuid> for InMemoryGroupRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Group>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables.groups.get(&id).cloned())
    }

    async fn insert(&self, group: Group) -> Result<Group, RepoError> {
        let mut tables = self.store.tables.write().await;
        if tables.groups.contains_key(&group.id) {
            return Err(RepoError::Constraint(format!(
                "group {} already exists",
                group.id
            )));
        }
        if tables.groups.values().any(|g| g.slug == group.slug) {
            return Err(RepoError::Constraint(format!(
                "slug '{}' already exists",
                group.slug
            )));
        }
        tables.groups.insert(group.id, group.clone());
        Ok(group)
    }

    async fn update(&self, group: Group) -> Result<Group, RepoError> {
        let mut tables = self.store.tables.write().await;
        match tables.groups.get_mut(&group.id) {
            Some(slot) => {
                *slot = group.clone();
                Ok(group)
            }
            None => Err(RepoError::NotFound),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut tables = self.store.tables.write().await;
        if tables.groups.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        // Posts survive the group; only the reference is cleared.
        for post in tables.posts.values_mut() {
            if post.group_id == Some(id) {
                post.group_id = None;
            }
        }
        Ok(())
    }
}

#[async_trait]
impl GroupRepository for InMemoryGroupRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Group>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables.groups.values().find(|g| g.slug == slug).cloned())
    }
}

/// In-memory post repository.
pub struct InMemoryPostRepository {
    store: MemoryStore,
}

impl InMemoryPostRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables.posts.get(&id).cloned())
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut tables = self.store.tables.write().await;
        if tables.posts.contains_key(&post.id) {
            return Err(RepoError::Constraint(format!(
                "post {} already exists",
                post.id
            )));
        }
        tables.posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut tables = self.store.tables.write().await;
        match tables.posts.get_mut(&post.id) {
            Some(slot) => {
                *slot = post.clone();
                Ok(post)
            }
            None => Err(RepoError::NotFound),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut tables = self.store.tables.write().await;
        if tables.posts.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }
        tables.comments.retain(|_, c| c.post_id != id);
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn list_all(&self) -> Result<Vec<Post>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(by_pub_date_desc(tables.posts.values().cloned().collect()))
    }

    async fn list_by_group(&self, group_id: Uuid) -> Result<Vec<Post>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(by_pub_date_desc(
            tables
                .posts
                .values()
                .filter(|p| p.group_id == Some(group_id))
                .cloned()
                .collect(),
        ))
    }

    async fn list_by_author(&self, author_id: Uuid) -> Result<Vec<Post>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(by_pub_date_desc(
            tables
                .posts
                .values()
                .filter(|p| p.author_id == author_id)
                .cloned()
                .collect(),
        ))
    }

    async fn list_by_authors(&self, author_ids: &[Uuid]) -> Result<Vec<Post>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(by_pub_date_desc(
            tables
                .posts
                .values()
                .filter(|p| author_ids.contains(&p.author_id))
                .cloned()
                .collect(),
        ))
    }
}

/// In-memory comment repository.
pub struct InMemoryCommentRepository {
    store: MemoryStore,
}

impl InMemoryCommentRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BaseRepository<Comment, Uuid> for InMemoryCommentRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Comment>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables.comments.get(&id).cloned())
    }

    async fn insert(&self, comment: Comment) -> Result<Comment, RepoError> {
        let mut tables = self.store.tables.write().await;
        if tables.comments.contains_key(&comment.id) {
            return Err(RepoError::Constraint(format!(
                "comment {} already exists",
                comment.id
            )));
        }
        tables.comments.insert(comment.id, comment.clone());
        Ok(comment)
    }

    async fn update(&self, comment: Comment) -> Result<Comment, RepoError> {
        let mut tables = self.store.tables.write().await;
        match tables.comments.get_mut(&comment.id) {
            Some(slot) => {
                *slot = comment.clone();
                Ok(comment)
            }
            None => Err(RepoError::NotFound),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut tables = self.store.tables.write().await;
        match tables.comments.remove(&id) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}

#[async_trait]
impl CommentRepository for InMemoryCommentRepository {
    async fn list_by_post(&self, post_id: Uuid) -> Result<Vec<Comment>, RepoError> {
        let tables = self.store.tables.read().await;
        let mut comments: Vec<Comment> = tables
            .comments
            .values()
            .filter(|c| c.post_id == post_id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created.cmp(&b.created));
        Ok(comments)
    }
}

/// In-memory follow repository.
pub struct InMemoryFollowRepository {
    store: MemoryStore,
}

impl InMemoryFollowRepository {
    pub fn new(store: MemoryStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FollowRepository for InMemoryFollowRepository {
    async fn create(&self, follow: Follow) -> Result<Follow, RepoError> {
        let mut tables = self.store.tables.write().await;
        if tables.follows.contains(&follow) {
            return Err(RepoError::Constraint(
                "follow pair already exists".to_string(),
            ));
        }
        tables.follows.push(follow.clone());
        Ok(follow)
    }

    async fn delete(&self, user_id: Uuid, author_id: Uuid) -> Result<bool, RepoError> {
        let mut tables = self.store.tables.write().await;
        let before = tables.follows.len();
        tables
            .follows
            .retain(|f| !(f.user_id == user_id && f.author_id == author_id));
        Ok(tables.follows.len() < before)
    }

    async fn exists(&self, user_id: Uuid, author_id: Uuid) -> Result<bool, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .follows
            .iter()
            .any(|f| f.user_id == user_id && f.author_id == author_id))
    }

    async fn following(&self, user_id: Uuid) -> Result<Vec<Uuid>, RepoError> {
        let tables = self.store.tables.read().await;
        Ok(tables
            .follows
            .iter()
            .filter(|f| f.user_id == user_id)
            .map(|f| f.author_id)
            .collect())
    }
}
