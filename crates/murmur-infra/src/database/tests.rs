use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use uuid::Uuid;

use murmur_core::domain::Post;
use murmur_core::error::RepoError;
use murmur_core::ports::{BaseRepository, FollowRepository, GroupRepository};

use super::entity::{follow, group, post};
use super::postgres_repo::{
    PostgresFollowRepository, PostgresGroupRepository, PostgresPostRepository,
};

#[tokio::test]
async fn find_post_by_id_maps_to_domain() {
    let post_id = Uuid::new_v4();
    let author_id = Uuid::new_v4();
    let now = Utc::now();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post::Model {
            id: post_id,
            text: "mock text".to_owned(),
            pub_date: now.into(),
            author_id,
            group_id: None,
            image: None,
        }]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.id, post_id);
    assert_eq!(post.text, "mock text");
    assert_eq!(post.author_id, author_id);
    assert_eq!(post.group_id, None);
}

#[tokio::test]
async fn find_group_by_slug_maps_to_domain() {
    let group_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![group::Model {
            id: group_id,
            title: "Rustaceans".to_owned(),
            slug: "rustaceans".to_owned(),
            description: "All things crab".to_owned(),
        }]])
        .into_connection();

    let repo = PostgresGroupRepository::new(db);

    let group = repo.find_by_slug("rustaceans").await.unwrap().unwrap();
    assert_eq!(group.id, group_id);
    assert_eq!(group.slug, "rustaceans");
}

#[tokio::test]
async fn following_collects_author_ids() {
    let user_id = Uuid::new_v4();
    let first = Uuid::new_v4();
    let second = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            follow::Model {
                user_id,
                author_id: first,
            },
            follow::Model {
                user_id,
                author_id: second,
            },
        ]])
        .into_connection();

    let repo = PostgresFollowRepository::new(db);

    let authors = repo.following(user_id).await.unwrap();
    assert_eq!(authors, vec![first, second]);
}

#[tokio::test]
async fn deleting_missing_row_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let repo: &dyn BaseRepository<Post, Uuid> = &repo;

    let err = repo.delete(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound));
}
