//! PrefetchCache: moka in-process cache of speculative work already done.
//!
//! TinyLFU admission, bounded entry count, time-to-live per entry.

use std::time::Duration;

use foresight_core::config::PrefetchConfig;
use foresight_core::ActionKind;
use moka::sync::Cache;

/// What was cached for a resource key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CachedResource {
    pub kind: ActionKind,
    pub stored_at_ms: u64,
}

#[derive(Clone)]
pub struct PrefetchCache {
    cache: Cache<String, CachedResource>,
}

impl std::fmt::Debug for PrefetchCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrefetchCache")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}

impl PrefetchCache {
    pub fn new(max_entries: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();
        Self { cache }
    }

    pub fn from_config(config: &PrefetchConfig) -> Self {
        Self::new(
            config.cache_capacity,
            Duration::from_secs(config.cache_ttl_secs),
        )
    }

    pub fn get(&self, resource_key: &str) -> Option<CachedResource> {
        self.cache.get(resource_key)
    }

    pub fn contains(&self, resource_key: &str) -> bool {
        self.cache.contains_key(resource_key)
    }

    pub fn insert(&self, resource_key: impl Into<String>, resource: CachedResource) {
        self.cache.insert(resource_key.into(), resource);
    }

    pub fn invalidate(&self, resource_key: &str) {
        self.cache.invalidate(resource_key);
    }

    /// Approximate: moka applies writes lazily until pending tasks run.
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Flush pending evictions and expirations.
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }

    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}
