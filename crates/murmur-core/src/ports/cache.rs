use async_trait::async_trait;
use std::time::Duration;

/// Cache trait - abstraction over caching backends (Redis, in-memory).
///
/// Injected wherever response memoization is needed so that tests can
/// swap in an in-memory or no-op implementation. The store only has to
/// provide last-writer-wins set/get/delete with time-based expiry.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Get a value from the cache. Expired entries read as absent.
    async fn get(&self, key: &str) -> Option<String>;

    /// Set a value with an optional TTL; `None` keeps it until deleted.
    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), CacheError>;

    /// Delete a key.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;

    /// Check whether a key currently holds an unexpired value.
    async fn exists(&self, key: &str) -> bool;
}

/// Cache operation errors.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Connection failed: {0}")]
    Connection(String),

    #[error("Operation failed: {0}")]
    Operation(String),
}
