//! In-memory cache implementation - used as fallback when Redis is
//! unavailable and as the cache backend in tests.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use tokio::sync::RwLock;

use murmur_core::ports::{Cache, CacheError};

struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn fresh(&self) -> bool {
        self.expires_at.is_none_or(|deadline| Instant::now() <= deadline)
    }
}

/// In-memory cache backed by a HashMap behind an async RwLock.
///
/// Expired entries are evicted lazily when read. Data is lost on process
/// restart.
#[derive(Default)]
pub struct InMemoryCache {
    entries: RwLock<HashMap<String, Entry>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Cache for InMemoryCache {
    async fn get(&self, key: &str) -> Option<String> {
        {
            let entries = self.entries.read().await;
            let entry = entries.get(key)?;
            if entry.fresh() {
                return Some(entry.value.clone());
            }
        }
        // The entry lapsed; drop it under a write lock. Re-check freshness
        // in case a writer replaced it between the two locks.
        let mut entries = self.entries.write().await;
        if entries.get(key).is_some_and(|e| !e.fresh()) {
            entries.remove(key);
        }
        None
    }

    async fn set(&self, key: &str, value: &str, ttl: Option<Duration>) -> Result<(), CacheError> {
        let mut entries = self.entries.write().await;
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: ttl.map(|d| Instant::now() + d),
            },
        );
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> bool {
        self.get(key).await.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get_returns_value() {
        let cache = InMemoryCache::new();
        cache.set("feed", "blob", None).await.unwrap();
        assert_eq!(cache.get("feed").await, Some("blob".to_string()));
    }

    #[tokio::test]
    async fn delete_removes_value() {
        let cache = InMemoryCache::new();
        cache.set("feed", "blob", None).await.unwrap();
        cache.delete("feed").await.unwrap();
        assert_eq!(cache.get("feed").await, None);
        assert!(!cache.exists("feed").await);
    }

    #[tokio::test]
    async fn entries_expire_after_ttl() {
        let cache = InMemoryCache::new();
        cache
            .set("feed", "blob", Some(Duration::from_millis(20)))
            .await
            .unwrap();
        assert!(cache.exists("feed").await);

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(cache.get("feed").await, None);
    }

    #[tokio::test]
    async fn set_overwrites_previous_value_and_ttl() {
        let cache = InMemoryCache::new();
        cache
            .set("feed", "old", Some(Duration::from_millis(20)))
            .await
            .unwrap();
        cache.set("feed", "new", None).await.unwrap();

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(cache.get("feed").await, Some("new".to_string()));
    }
}
