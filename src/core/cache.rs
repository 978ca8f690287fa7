use crate::domain::model::{HarvestKey, ResultRow};
use crate::utils::error::Result;
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

struct CacheEntry {
    rows: Vec<ResultRow>,
    fetched_at: Instant,
}

/// TTL memoization of harvested result sets, keyed by (year, election type).
///
/// Every key owns its own slot lock: concurrent callers asking for the same
/// key share a single upstream fetch, while different keys populate
/// independently. A failed fetch leaves the slot untouched, so errors are
/// never served from cache.
pub struct ResultCache {
    ttl: Duration,
    slots: Mutex<HashMap<HarvestKey, Arc<Mutex<Option<CacheEntry>>>>>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self::new_with_ttl(DEFAULT_TTL)
    }

    pub fn new_with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            slots: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the cached rows for `key` when they are younger than the TTL,
    /// otherwise runs `fetch` and stores its result. The slot stays locked
    /// for the duration of the fetch.
    pub async fn get_or_fetch<F, Fut>(&self, key: HarvestKey, fetch: F) -> Result<Vec<ResultRow>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<ResultRow>>>,
    {
        let slot = {
            let mut slots = self.slots.lock().await;
            Arc::clone(slots.entry(key).or_default())
        };

        let mut entry = slot.lock().await;
        if let Some(cached) = entry.as_ref() {
            if cached.fetched_at.elapsed() < self.ttl {
                tracing::debug!("cache hit, {} rows", cached.rows.len());
                return Ok(cached.rows.clone());
            }
        }

        let rows = fetch().await?;
        *entry = Some(CacheEntry {
            rows: rows.clone(),
            fetched_at: Instant::now(),
        });
        Ok(rows)
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new()
    }
}
