//! Service-level tests wiring the core services to the in-memory store.

use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use uuid::Uuid;

use murmur_core::DomainError;
use murmur_core::domain::{Follow, Post, User};
use murmur_core::error::RepoError;
use murmur_core::feed::{FeedComposer, FeedView};
use murmur_core::ports::{BaseRepository, FollowRepository, UserRepository};
use murmur_core::service::{FeedService, FollowService, GroupService, PostService};

use crate::cache::InMemoryCache;
use crate::memory::{
    InMemoryCommentRepository, InMemoryFollowRepository, InMemoryGroupRepository,
    InMemoryPostRepository, InMemoryUserRepository, MemoryStore,
};

struct Env {
    users: Arc<InMemoryUserRepository>,
    posts: Arc<InMemoryPostRepository>,
    comments: Arc<InMemoryCommentRepository>,
    follows: Arc<InMemoryFollowRepository>,
    post_service: PostService,
    group_service: GroupService,
    follow_service: FollowService,
    feed: FeedService,
}

fn env() -> Env {
    let store = MemoryStore::new();
    let users = Arc::new(InMemoryUserRepository::new(store.clone()));
    let groups = Arc::new(InMemoryGroupRepository::new(store.clone()));
    let posts = Arc::new(InMemoryPostRepository::new(store.clone()));
    let comments = Arc::new(InMemoryCommentRepository::new(store.clone()));
    let follows = Arc::new(InMemoryFollowRepository::new(store));
    let cache = Arc::new(InMemoryCache::new());

    let composer = FeedComposer::new(
        users.clone(),
        groups.clone(),
        posts.clone(),
        follows.clone(),
    );
    let feed = FeedService::new(composer, cache, 10, Duration::from_secs(20));
    let post_service = PostService::new(
        users.clone(),
        groups.clone(),
        posts.clone(),
        comments.clone(),
    );
    let group_service = GroupService::new(groups);
    let follow_service = FollowService::new(users.clone(), follows.clone());

    Env {
        users,
        posts,
        comments,
        follows,
        post_service,
        group_service,
        follow_service,
        feed,
    }
}

async fn seed_user(env: &Env, username: &str) -> User {
    env.users.insert(User::new(username.to_string())).await.unwrap()
}

/// Insert a post with a deterministic publication minute so ordering
/// assertions do not depend on wall-clock resolution.
async fn seed_post(env: &Env, author: &User, minute: u32, text: &str) -> Post {
    let mut post = Post::new(author.id, text.to_string(), None, None);
    post.pub_date = Utc.with_ymd_and_hms(2026, 5, 1, 12, minute, 0).unwrap();
    env.posts.insert(post).await.unwrap()
}

#[tokio::test]
async fn listings_are_newest_first() {
    let env = env();
    let author = seed_user(&env, "poet").await;
    seed_post(&env, &author, 0, "first").await;
    seed_post(&env, &author, 2, "third").await;
    seed_post(&env, &author, 1, "second").await;

    let page = env.feed.list(&FeedView::All, None).await.unwrap();
    let texts: Vec<&str> = page.items.iter().map(|p| p.text.as_str()).collect();
    assert_eq!(texts, vec!["third", "second", "first"]);
}

#[tokio::test]
async fn deleting_group_detaches_posts_without_deleting_them() {
    let env = env();
    let author = seed_user(&env, "poet").await;
    let group = env
        .group_service
        .create_group("Rustaceans", "rustaceans", "All things crab")
        .await
        .unwrap();

    let post = env
        .post_service
        .create_post("poet", "hello group", Some("rustaceans"), None)
        .await
        .unwrap();
    assert_eq!(post.group_id, Some(group.id));

    env.group_service.delete_group(group.id).await.unwrap();

    let survivor = env.posts.find_by_id(post.id).await.unwrap().unwrap();
    assert_eq!(survivor.group_id, None);
    assert_eq!(survivor.author_id, author.id);
}

#[tokio::test]
async fn deleting_author_cascades_posts_and_comments() {
    let env = env();
    let author = seed_user(&env, "poet").await;
    seed_user(&env, "reader").await;

    let post = env
        .post_service
        .create_post("poet", "soon gone", None, None)
        .await
        .unwrap();
    let comment = env
        .post_service
        .add_comment(post.id, "reader", "nice one")
        .await
        .unwrap();

    env.users.delete(author.id).await.unwrap();

    assert!(env.posts.find_by_id(post.id).await.unwrap().is_none());
    assert!(env.comments.find_by_id(comment.id).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_follow_pair_is_rejected_by_the_store() {
    let env = env();
    let follower = seed_user(&env, "follower").await;
    let followed = seed_user(&env, "followed").await;

    env.follows
        .create(Follow::new(follower.id, followed.id))
        .await
        .unwrap();
    let err = env
        .follows
        .create(Follow::new(follower.id, followed.id))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Constraint(_)));
}

#[tokio::test]
async fn follow_service_is_idempotent() {
    let env = env();
    seed_user(&env, "follower").await;
    seed_user(&env, "followed").await;

    env.follow_service
        .follow("follower", "followed")
        .await
        .unwrap();
    // The duplicate pair never surfaces as an error through the service.
    env.follow_service
        .follow("follower", "followed")
        .await
        .unwrap();

    let follower = env.users.find_by_username("follower").await.unwrap().unwrap();
    assert_eq!(env.follows.following(follower.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn self_follow_is_rejected() {
    let env = env();
    seed_user(&env, "narcissus").await;

    let err = env
        .follow_service
        .follow("narcissus", "narcissus")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[tokio::test]
async fn unfollow_without_edge_is_not_found() {
    let env = env();
    seed_user(&env, "follower").await;
    seed_user(&env, "followed").await;

    let err = env
        .follow_service
        .unfollow("follower", "followed")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn thirteen_posts_paginate_ten_then_three() {
    let env = env();
    let author = seed_user(&env, "prolific").await;
    for i in 0..13 {
        seed_post(&env, &author, i, &format!("post {i}")).await;
    }

    let first = env.feed.list(&FeedView::All, None).await.unwrap();
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.total_pages, 2);
    assert!(first.has_next());

    let second = env.feed.list(&FeedView::All, Some(2)).await.unwrap();
    assert_eq!(second.items.len(), 3);
    assert!(!second.has_next());

    // A page past the end serves the last page's content.
    let clamped = env.feed.list(&FeedView::All, Some(3)).await.unwrap();
    assert_eq!(clamped.number, 2);
    assert_eq!(
        clamped.items.iter().map(|p| p.id).collect::<Vec<_>>(),
        second.items.iter().map(|p| p.id).collect::<Vec<_>>()
    );
}

#[tokio::test]
async fn following_feed_is_empty_without_follows() {
    let env = env();
    seed_user(&env, "loner").await;
    let author = seed_user(&env, "poet").await;
    seed_post(&env, &author, 0, "unseen").await;

    let page = env
        .feed
        .list(&FeedView::Following("loner".to_string()), None)
        .await
        .unwrap();
    assert!(page.items.is_empty());
}

#[tokio::test]
async fn following_feed_shows_followed_authors_only() {
    let env = env();
    seed_user(&env, "follower").await;
    let followed = seed_user(&env, "followed").await;
    let stranger = seed_user(&env, "stranger").await;
    seed_post(&env, &followed, 0, "from followed").await;
    seed_post(&env, &stranger, 1, "from stranger").await;

    env.follow_service
        .follow("follower", "followed")
        .await
        .unwrap();

    let page = env
        .feed
        .list(&FeedView::Following("follower".to_string()), None)
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].text, "from followed");

    // The followed author's own following feed stays empty.
    let authors_own = env
        .feed
        .list(&FeedView::Following("followed".to_string()), None)
        .await
        .unwrap();
    assert!(authors_own.items.is_empty());
}

#[tokio::test]
async fn unknown_group_slug_is_not_found() {
    let env = env();
    let err = env
        .feed
        .list(&FeedView::Group("nonexistent-slug".to_string()), None)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn unknown_author_is_not_found() {
    let env = env();
    let err = env
        .feed
        .list(&FeedView::Author("ghost".to_string()), None)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn duplicate_group_slug_is_a_duplicate_error() {
    let env = env();
    env.group_service
        .create_group("First", "taken", "")
        .await
        .unwrap();
    let err = env
        .group_service
        .create_group("Second", "taken", "")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Duplicate(_)));
}

#[tokio::test]
async fn only_the_author_may_edit_or_delete() {
    let env = env();
    seed_user(&env, "owner").await;
    seed_user(&env, "intruder").await;

    let post = env
        .post_service
        .create_post("owner", "mine", None, None)
        .await
        .unwrap();

    let err = env
        .post_service
        .update_post(post.id, "intruder", "stolen", None)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));

    let err = env
        .post_service
        .delete_post(post.id, "intruder")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Forbidden(_)));

    let updated = env
        .post_service
        .update_post(post.id, "owner", "still mine", None)
        .await
        .unwrap();
    assert_eq!(updated.text, "still mine");
    assert_eq!(updated.pub_date, post.pub_date);
}

#[tokio::test]
async fn empty_text_is_rejected() {
    let env = env();
    seed_user(&env, "poet").await;

    let err = env
        .post_service
        .create_post("poet", "   ", None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));

    let post = env
        .post_service
        .create_post("poet", "real text", None, None)
        .await
        .unwrap();
    let err = env
        .post_service
        .add_comment(post.id, "poet", "")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[tokio::test]
async fn commenting_on_missing_post_is_not_found() {
    let env = env();
    seed_user(&env, "reader").await;

    let err = env
        .post_service
        .add_comment(Uuid::new_v4(), "reader", "hello?")
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound(_)));
}

#[tokio::test]
async fn comments_list_oldest_first() {
    let env = env();
    seed_user(&env, "poet").await;
    seed_user(&env, "reader").await;

    let post = env
        .post_service
        .create_post("poet", "discuss", None, None)
        .await
        .unwrap();
    let first = env
        .post_service
        .add_comment(post.id, "reader", "first")
        .await
        .unwrap();
    let second = env
        .post_service
        .add_comment(post.id, "poet", "second")
        .await
        .unwrap();

    let listed = env.post_service.comments(post.id).await.unwrap();
    assert_eq!(
        listed.iter().map(|c| c.id).collect::<Vec<_>>(),
        vec![first.id, second.id]
    );
}

#[tokio::test]
async fn landing_snapshot_is_stale_until_cleared() {
    let env = env();
    seed_user(&env, "poet").await;
    let post = env
        .post_service
        .create_post("poet", "original text", None, None)
        .await
        .unwrap();

    // Miss: composes and stores blob A.
    let blob_a = env.feed.landing_snapshot().await.unwrap();
    assert!(blob_a.contains("original text"));

    env.post_service
        .update_post(post.id, "poet", "edited text", None)
        .await
        .unwrap();

    // Within the TTL the stored blob comes back verbatim, mutation and
    // all.
    let stale = env.feed.landing_snapshot().await.unwrap();
    assert_eq!(stale, blob_a);

    env.feed.clear_snapshot().await.unwrap();

    let blob_b = env.feed.landing_snapshot().await.unwrap();
    assert_ne!(blob_b, blob_a);
    assert!(blob_b.contains("edited text"));
}

#[tokio::test]
async fn group_feed_lists_only_that_group() {
    let env = env();
    seed_user(&env, "poet").await;
    env.group_service
        .create_group("Rustaceans", "rustaceans", "")
        .await
        .unwrap();
    env.post_service
        .create_post("poet", "in group", Some("rustaceans"), None)
        .await
        .unwrap();
    env.post_service
        .create_post("poet", "ungrouped", None, None)
        .await
        .unwrap();

    let page = env
        .feed
        .list(&FeedView::Group("rustaceans".to_string()), None)
        .await
        .unwrap();
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].text, "in group");
}
