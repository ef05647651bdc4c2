use crate::traits::Transport;
use crate::types::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};
use tracing::debug;

#[derive(Debug, Clone)]
struct CacheEntry {
    body: String,
    fetched_at: Instant,
}

/// Time-bounded response cache keyed by endpoint URL.
///
/// Entries expire purely by age. Refreshes are single-flight per key: callers
/// racing on a stale entry wait for the first one's fetch instead of all hitting
/// the upstream. Failed fetches are not stored.
#[derive(Clone)]
pub struct ResponseCache {
    ttl: Duration,
    slots: Arc<RwLock<HashMap<String, Arc<Mutex<Option<CacheEntry>>>>>>,
}

impl ResponseCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            slots: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Return the cached body for `key` if still fresh, otherwise run `fetch`
    /// and store its successful result. The bool is true on a cache hit.
    pub async fn get_or_fetch<F, Fut>(&self, key: &str, fetch: F) -> Result<(String, bool)>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<String>>,
    {
        let slot = self.slot(key).await;
        let mut entry = slot.lock().await;

        if let Some(cached) = entry.as_ref() {
            if cached.fetched_at.elapsed() < self.ttl {
                debug!("Cache hit: {}", key);
                return Ok((cached.body.clone(), true));
            }
            debug!("Cache entry expired: {}", key);
        }

        let body = fetch().await?;
        *entry = Some(CacheEntry {
            body: body.clone(),
            fetched_at: Instant::now(),
        });
        Ok((body, false))
    }

    async fn slot(&self, key: &str) -> Arc<Mutex<Option<CacheEntry>>> {
        {
            let slots = self.slots.read().await;
            if let Some(slot) = slots.get(key) {
                return slot.clone();
            }
        }

        let mut slots = self.slots.write().await;
        slots
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(None)))
            .clone()
    }
}

/// `Transport` decorator that answers from a `ResponseCache` while the entry
/// for a URL is fresh and only goes to `inner` on a miss.
pub struct CachedTransport {
    inner: Arc<dyn Transport>,
    cache: ResponseCache,
}

impl CachedTransport {
    pub fn new(inner: Arc<dyn Transport>, cache: ResponseCache) -> Self {
        Self { inner, cache }
    }
}

#[async_trait]
impl Transport for CachedTransport {
    async fn get_text(&self, url: &str) -> Result<String> {
        let inner = &self.inner;
        let (body, _) = self.cache.get_or_fetch(url, || inner.get_text(url)).await?;
        Ok(body)
    }
}
