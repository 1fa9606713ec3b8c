//! Application state - shared across all handlers.

use std::sync::Arc;
use std::time::Duration;

use murmur_core::feed::FeedComposer;
use murmur_core::ports::{
    Cache, CommentRepository, FollowRepository, GroupRepository, PostRepository, UserRepository,
};
use murmur_core::service::{FeedService, FollowService, GroupService, PostService};
use murmur_infra::cache::InMemoryCache;
use murmur_infra::memory::{
    InMemoryCommentRepository, InMemoryFollowRepository, InMemoryGroupRepository,
    InMemoryPostRepository, InMemoryUserRepository, MemoryStore,
};

use crate::config::AppConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Direct repository access for identity-sync endpoints.
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<PostService>,
    pub groups: Arc<GroupService>,
    pub follows: Arc<FollowService>,
    pub feed: Arc<FeedService>,
}

struct Repositories {
    users: Arc<dyn UserRepository>,
    groups: Arc<dyn GroupRepository>,
    posts: Arc<dyn PostRepository>,
    comments: Arc<dyn CommentRepository>,
    follows: Arc<dyn FollowRepository>,
}

fn memory_repositories() -> Repositories {
    let store = MemoryStore::new();
    Repositories {
        users: Arc::new(InMemoryUserRepository::new(store.clone())),
        groups: Arc::new(InMemoryGroupRepository::new(store.clone())),
        posts: Arc::new(InMemoryPostRepository::new(store.clone())),
        comments: Arc::new(InMemoryCommentRepository::new(store.clone())),
        follows: Arc::new(InMemoryFollowRepository::new(store)),
    }
}

#[cfg(feature = "postgres")]
fn postgres_repositories(conn: &murmur_infra::database::DatabaseConnections) -> Repositories {
    use murmur_infra::database::{
        PostgresCommentRepository, PostgresFollowRepository, PostgresGroupRepository,
        PostgresPostRepository, PostgresUserRepository,
    };

    Repositories {
        users: Arc::new(PostgresUserRepository::new(conn.main.clone())),
        groups: Arc::new(PostgresGroupRepository::new(conn.main.clone())),
        posts: Arc::new(PostgresPostRepository::new(conn.main.clone())),
        comments: Arc::new(PostgresCommentRepository::new(conn.main.clone())),
        follows: Arc::new(PostgresFollowRepository::new(conn.main.clone())),
    }
}

impl AppState {
    /// Build the application state with the configured backends.
    pub async fn new(config: &AppConfig) -> Self {
        let repos = Self::build_repositories(config).await;
        let cache = Self::build_cache(config).await;

        tracing::info!("Application state initialized");
        Self::assemble(repos, cache, config.page_size, config.feed_cache_ttl)
    }

    /// Fully in-memory state - used in tests and minimal deployments.
    pub fn in_memory(page_size: usize, feed_cache_ttl: Duration) -> Self {
        Self::assemble(
            memory_repositories(),
            Arc::new(InMemoryCache::new()),
            page_size,
            feed_cache_ttl,
        )
    }

    fn assemble(
        repos: Repositories,
        cache: Arc<dyn Cache>,
        page_size: usize,
        feed_cache_ttl: Duration,
    ) -> Self {
        let composer = FeedComposer::new(
            repos.users.clone(),
            repos.groups.clone(),
            repos.posts.clone(),
            repos.follows.clone(),
        );

        Self {
            feed: Arc::new(FeedService::new(composer, cache, page_size, feed_cache_ttl)),
            posts: Arc::new(PostService::new(
                repos.users.clone(),
                repos.groups.clone(),
                repos.posts.clone(),
                repos.comments.clone(),
            )),
            groups: Arc::new(GroupService::new(repos.groups.clone())),
            follows: Arc::new(FollowService::new(
                repos.users.clone(),
                repos.follows.clone(),
            )),
            users: repos.users,
        }
    }

    async fn build_repositories(config: &AppConfig) -> Repositories {
        #[cfg(feature = "postgres")]
        if let Some(db_config) = &config.database {
            match murmur_infra::database::DatabaseConnections::init(db_config).await {
                Ok(conn) => return postgres_repositories(&conn),
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                }
            }
        } else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        }

        #[cfg(not(feature = "postgres"))]
        if config.database.is_some() {
            tracing::warn!("DATABASE_URL set but the postgres feature is disabled");
        }

        memory_repositories()
    }

    async fn build_cache(config: &AppConfig) -> Arc<dyn Cache> {
        #[cfg(feature = "redis")]
        if let Some(url) = &config.redis_url {
            use murmur_infra::cache::{RedisCache, RedisConfig};

            let redis_config = RedisConfig {
                url: url.clone(),
                ..RedisConfig::default()
            };
            match RedisCache::new(redis_config).await {
                Ok(cache) => return Arc::new(cache),
                Err(e) => {
                    tracing::error!("Failed to connect to Redis: {}. Using in-memory cache.", e);
                }
            }
        }

        #[cfg(not(feature = "redis"))]
        if config.redis_url.is_some() {
            tracing::warn!("REDIS_URL set but the redis feature is disabled");
        }

        Arc::new(InMemoryCache::new())
    }
}
