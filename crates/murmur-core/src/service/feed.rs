use std::sync::Arc;
use std::time::Duration;

use crate::domain::Post;
use crate::error::DomainError;
use crate::feed::{FeedComposer, FeedView};
use crate::pagination::{self, Page};
use crate::ports::Cache;

/// Fixed cache key for the landing feed snapshot. The snapshot is not
/// parameterized by viewer, page, or filters.
pub const LANDING_FEED_KEY: &str = "feed:landing";

/// How long a landing feed snapshot stays valid by default.
pub const DEFAULT_SNAPSHOT_TTL: Duration = Duration::from_secs(20);

/// Read-path operations: paginated feed listings and the cached landing
/// snapshot.
pub struct FeedService {
    composer: FeedComposer,
    cache: Arc<dyn Cache>,
    page_size: usize,
    snapshot_ttl: Duration,
}

impl FeedService {
    pub fn new(
        composer: FeedComposer,
        cache: Arc<dyn Cache>,
        page_size: usize,
        snapshot_ttl: Duration,
    ) -> Self {
        Self {
            composer,
            cache,
            page_size,
            snapshot_ttl,
        }
    }

    /// List the requested page of a feed view.
    pub async fn list(
        &self,
        view: &FeedView,
        page: Option<usize>,
    ) -> Result<Page<Post>, DomainError> {
        let posts = self.composer.compose(view).await?;
        Ok(pagination::paginate(posts, page, self.page_size))
    }

    /// Serialized first page of the `All` feed, memoized under a fixed
    /// key.
    ///
    /// The snapshot expires only by TTL: writes after it was stored stay
    /// invisible until then, so a viewer can observe a stale landing feed
    /// for up to the TTL. `clear_snapshot` drops it out of band.
    pub async fn landing_snapshot(&self) -> Result<String, DomainError> {
        if let Some(blob) = self.cache.get(LANDING_FEED_KEY).await {
            tracing::debug!(key = LANDING_FEED_KEY, "Landing feed served from cache");
            return Ok(blob);
        }

        let page = self.list(&FeedView::All, None).await?;
        let blob = serde_json::to_string(&page.items)
            .map_err(|e| DomainError::Internal(e.to_string()))?;

        // A cache store failure degrades to recomputing next time; the
        // response itself is already built.
        if let Err(err) = self
            .cache
            .set(LANDING_FEED_KEY, &blob, Some(self.snapshot_ttl))
            .await
        {
            tracing::warn!(error = %err, "Failed to store landing feed snapshot");
        }
        Ok(blob)
    }

    /// Drop the landing snapshot ahead of its expiry. Used by test and
    /// administrative tooling; normal writes never invalidate the cache.
    pub async fn clear_snapshot(&self) -> Result<(), DomainError> {
        self.cache
            .delete(LANDING_FEED_KEY)
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))
    }
}
