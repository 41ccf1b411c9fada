use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::ActionKind;

/// Resource prefetcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrefetchConfig {
    pub prerender_lifetime_ms: u64,
    pub preload_lifetime_ms: u64,
    pub warm_cache_lifetime_ms: u64,
    pub prefetch_lifetime_ms: u64,
    /// How long settled actions stay in the registry before being purged.
    pub terminal_retention_ms: u64,
    /// Maximum entries in the in-process warm cache.
    pub cache_capacity: u64,
    pub cache_ttl_secs: u64,
    /// Interval of the stale-action sweeper.
    pub sweep_interval_ms: u64,
}

impl PrefetchConfig {
    /// Lifetime budget for an action of the given kind.
    pub fn lifetime_ms(&self, kind: &ActionKind) -> u64 {
        match kind {
            ActionKind::Prerender => self.prerender_lifetime_ms,
            ActionKind::Preload { .. } => self.preload_lifetime_ms,
            ActionKind::WarmCache => self.warm_cache_lifetime_ms,
            ActionKind::Prefetch { .. } => self.prefetch_lifetime_ms,
        }
    }
}

impl Default for PrefetchConfig {
    fn default() -> Self {
        Self {
            prerender_lifetime_ms: defaults::DEFAULT_PRERENDER_LIFETIME_MS,
            preload_lifetime_ms: defaults::DEFAULT_PRELOAD_LIFETIME_MS,
            warm_cache_lifetime_ms: defaults::DEFAULT_WARM_CACHE_LIFETIME_MS,
            prefetch_lifetime_ms: defaults::DEFAULT_PREFETCH_LIFETIME_MS,
            terminal_retention_ms: defaults::DEFAULT_TERMINAL_RETENTION_MS,
            cache_capacity: defaults::DEFAULT_CACHE_CAPACITY,
            cache_ttl_secs: defaults::DEFAULT_CACHE_TTL_SECS,
            sweep_interval_ms: defaults::DEFAULT_SWEEP_INTERVAL_MS,
        }
    }
}
