//! Read-through caching decorator for the link repository.

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::fast_store::FastStore;
use async_trait::async_trait;
use metrics::counter;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Key namespace for cached URL mappings.
const CACHE_KEY_PREFIX: &str = "url:";

/// Wraps a [`LinkRepository`] with a read-through cache in the fast store.
///
/// Reads consult the cache first and fall through to the inner repository
/// on a miss, populating the cache best-effort on the way back. A cache
/// backend failure never fails a read: the lookup degrades to the durable
/// store. Writes bypass the cache entirely.
///
/// Because records are immutable, concurrent reads racing to populate the
/// same key always write equal values, and no invalidation path is needed.
pub struct CachedLinkRepository<R, F> {
    inner: Arc<R>,
    fast_store: Arc<F>,
    ttl: Duration,
}

impl<R: LinkRepository, F: FastStore> CachedLinkRepository<R, F> {
    pub fn new(inner: Arc<R>, fast_store: Arc<F>, ttl: Duration) -> Self {
        Self {
            inner,
            fast_store,
            ttl,
        }
    }

    fn cache_key(code: &str) -> String {
        format!("{CACHE_KEY_PREFIX}{code}")
    }
}

#[async_trait]
impl<R: LinkRepository, F: FastStore> LinkRepository for CachedLinkRepository<R, F> {
    /// Delegates straight to the inner repository, skipping the cache.
    ///
    /// The uniqueness retry loop is write-heavy; not warming the cache here
    /// saves a round trip per attempt, and immutability means there is
    /// nothing to invalidate.
    async fn put(&self, code: &str, original_url: &str) -> Result<(), AppError> {
        self.inner.put(code, original_url).await
    }

    async fn get(&self, code: &str) -> Result<ShortLink, AppError> {
        let key = Self::cache_key(code);

        match self.fast_store.get(&key).await {
            Ok(Some(original_url)) => {
                debug!("cache hit: {}", code);
                counter!("link_cache_hits_total").increment(1);
                return Ok(ShortLink::cached(code, original_url));
            }
            Ok(None) => {
                debug!("cache miss: {}", code);
                counter!("link_cache_misses_total").increment(1);
            }
            Err(e) => {
                // Fail-open toward the durable store: an unavailable cache
                // must not fail the read.
                warn!("cache read error for {}, falling through: {}", code, e);
                counter!("link_cache_read_errors_total").increment(1);
            }
        }

        let link = self.inner.get(code).await?;

        if let Err(e) = self
            .fast_store
            .set(&key, &link.original_url, self.ttl)
            .await
        {
            warn!("cache write error for {}: {}", code, e);
            counter!("link_cache_write_errors_total").increment(1);
        }

        Ok(link)
    }
}
