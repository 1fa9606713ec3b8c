//! # Murmur Infrastructure
//!
//! Concrete implementations of the ports defined in `murmur-core`.
//! This crate contains the in-memory store, the PostgreSQL repositories,
//! and the cache backends.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL persistence via SeaORM
//! - `redis` - Redis-backed response cache

pub mod cache;
pub mod database;
pub mod memory;

// Re-exports - In-Memory
pub use cache::InMemoryCache;
pub use memory::{
    InMemoryCommentRepository, InMemoryFollowRepository, InMemoryGroupRepository,
    InMemoryPostRepository, InMemoryUserRepository, MemoryStore,
};

pub use database::DatabaseConfig;

#[cfg(feature = "postgres")]
pub use database::{
    DatabaseConnections, PostgresCommentRepository, PostgresFollowRepository,
    PostgresGroupRepository, PostgresPostRepository, PostgresUserRepository,
};

// Re-exports - Redis
#[cfg(feature = "redis")]
pub use cache::{RedisCache, RedisConfig};
