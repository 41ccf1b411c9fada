//! Prefetcher: runs one speculative action to a terminal status.
//!
//! Prerender goes through a speculation rule when the platform supports
//! one and degrades to a document prefetch otherwise. Failures become a
//! terminal status and are never retried.

use std::sync::Arc;
use std::time::Duration;

use foresight_core::config::PrefetchConfig;
use foresight_core::errors::PrefetchError;
use foresight_core::models::{Destination, ResourcePriority};
use foresight_core::traits::{FetchRequest, IPrefetchPlatform};
use foresight_core::{ActionKind, ActionStatus, Eagerness, SpeculativeAction};
use foresight_scheduler::ActionRegistry;
use tokio::task::JoinHandle;
use tokio::time::{timeout, Instant};
use tracing::{debug, info_span, warn, Instrument};

use crate::cache::{CachedResource, PrefetchCache};
use crate::clock::MonotonicClock;
use crate::outcome::PrefetchOutcome;

/// What a sweep removed from the registry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SweepReport {
    pub expired: Vec<SpeculativeAction>,
    pub purged: usize,
}

/// Executes actions against a platform. Cheap to clone; clones share the
/// platform, registry and cache.
pub struct Prefetcher<P: IPrefetchPlatform> {
    platform: Arc<P>,
    registry: ActionRegistry,
    cache: PrefetchCache,
    config: PrefetchConfig,
    clock: MonotonicClock,
}

impl<P: IPrefetchPlatform> Clone for Prefetcher<P> {
    fn clone(&self) -> Self {
        Self {
            platform: Arc::clone(&self.platform),
            registry: self.registry.clone(),
            cache: self.cache.clone(),
            config: self.config.clone(),
            clock: self.clock,
        }
    }
}

impl<P: IPrefetchPlatform> Prefetcher<P> {
    pub fn new(
        platform: Arc<P>,
        registry: ActionRegistry,
        config: PrefetchConfig,
        clock: MonotonicClock,
    ) -> Self {
        Self {
            cache: PrefetchCache::from_config(&config),
            platform,
            registry,
            config,
            clock,
        }
    }

    pub fn cache(&self) -> &PrefetchCache {
        &self.cache
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    pub fn clock(&self) -> MonotonicClock {
        self.clock
    }

    /// Run `action` on its own task.
    pub fn spawn(&self, action: SpeculativeAction) -> JoinHandle<PrefetchOutcome> {
        let prefetcher = self.clone();
        tokio::spawn(async move { prefetcher.execute(action).await })
    }

    /// Move `action` through its lifecycle and report how it ended.
    pub async fn execute(&self, action: SpeculativeAction) -> PrefetchOutcome {
        let span = info_span!(
            "foresight.prefetch",
            resource = %action.resource_key,
            kind = action.kind.as_str(),
            eagerness = action.eagerness.as_str(),
        );
        self.execute_inner(action).instrument(span).await
    }

    async fn execute_inner(&self, action: SpeculativeAction) -> PrefetchOutcome {
        let started = Instant::now();
        let key = action.resource_key.as_str();
        let generation = action.generation;

        if let Err(e) =
            self.registry
                .transition(key, generation, ActionStatus::InFlight, self.clock.now_ms())
        {
            debug!(error = %e, "action no longer runnable");
            return self.outcome(&action, ActionStatus::Queued, started, false, Some(e.to_string()));
        }

        let budget_ms = self.config.lifetime_ms(&action.kind);
        let result = timeout(Duration::from_millis(budget_ms), self.perform(&action)).await;
        let now = self.clock.now_ms();

        match result {
            Ok(Ok(cache_hit)) => match self.settle(&action, ActionStatus::Completed, now) {
                Some(status) => {
                    debug!(cache_hit, status = status.as_str(), "action settled");
                    self.outcome(&action, status, started, cache_hit, None)
                }
                None => self.swept(&action, started, None),
            },
            Ok(Err(e)) => {
                warn!(error = %e, "speculative action failed");
                match self.settle(&action, ActionStatus::Failed, now) {
                    Some(status) => self.outcome(&action, status, started, false, Some(e.to_string())),
                    None => self.swept(&action, started, Some(e.to_string())),
                }
            }
            Err(_) => {
                let error = PrefetchError::Timeout {
                    resource: action.resource_key.clone(),
                    budget_ms,
                };
                warn!(error = %error, "speculative action expired");
                match self.registry.expire(key, generation, now) {
                    Ok(_) => self.outcome(
                        &action,
                        ActionStatus::Expired,
                        started,
                        false,
                        Some(error.to_string()),
                    ),
                    Err(e) => {
                        debug!(error = %e, "expired entry already gone");
                        self.swept(&action, started, Some(error.to_string()))
                    }
                }
            }
        }
    }

    /// Apply a terminal status. `None` when the sweeper got there first.
    fn settle(
        &self,
        action: &SpeculativeAction,
        status: ActionStatus,
        now_ms: u64,
    ) -> Option<ActionStatus> {
        match self
            .registry
            .transition(&action.resource_key, action.generation, status, now_ms)
        {
            Ok(settled) => Some(settled.status),
            Err(e) => {
                debug!(error = %e, "action was settled elsewhere");
                None
            }
        }
    }

    /// Returns whether the work was already cached.
    async fn perform(&self, action: &SpeculativeAction) -> Result<bool, PrefetchError> {
        let key = action.resource_key.as_str();
        if self.cache.contains(key) {
            debug!("already cached");
            return Ok(true);
        }

        match action.kind {
            ActionKind::WarmCache => {}
            ActionKind::Prerender => self.prerender(key, action.eagerness).await?,
            ActionKind::Prefetch { destination } => {
                self.platform
                    .fetch(FetchRequest {
                        url: key.to_string(),
                        destination,
                        priority: action.eagerness,
                    })
                    .await?
            }
            ActionKind::Preload {
                destination,
                priority,
            } => {
                self.platform
                    .fetch(FetchRequest {
                        url: key.to_string(),
                        destination,
                        priority: action.eagerness.max(declared_eagerness(priority)),
                    })
                    .await?
            }
        }

        self.cache.insert(
            key,
            CachedResource {
                kind: action.kind,
                stored_at_ms: self.clock.now_ms(),
            },
        );
        Ok(false)
    }

    async fn prerender(&self, url: &str, eagerness: Eagerness) -> Result<(), PrefetchError> {
        if self.platform.supports_speculation_rules() {
            match self.platform.add_speculation_rule(url, eagerness).await {
                Ok(()) => return Ok(()),
                Err(PrefetchError::Unsupported { capability }) => {
                    warn!(%capability, "speculation rule rejected, falling back to document prefetch");
                }
                Err(e) => return Err(e),
            }
        }
        self.platform
            .fetch(FetchRequest {
                url: url.to_string(),
                destination: Destination::Document,
                priority: eagerness,
            })
            .await
    }

    /// Expire actions past their lifetime and drop long-settled entries.
    pub fn sweep(&self) -> SweepReport {
        let now = self.clock.now_ms();
        let expired = self
            .registry
            .expire_stale(now, |kind| self.config.lifetime_ms(kind));
        let purged = self
            .registry
            .purge_terminal(now, self.config.terminal_retention_ms);
        self.cache.run_pending_tasks();
        if !expired.is_empty() || purged > 0 {
            debug!(expired = expired.len(), purged, "registry swept");
        }
        SweepReport { expired, purged }
    }

    fn outcome(
        &self,
        action: &SpeculativeAction,
        status: ActionStatus,
        started: Instant,
        cache_hit: bool,
        error: Option<String>,
    ) -> PrefetchOutcome {
        PrefetchOutcome {
            resource_key: action.resource_key.clone(),
            generation: action.generation,
            kind: action.kind,
            status,
            duration: started.elapsed(),
            cache_hit,
            error,
            swept: false,
        }
    }

    /// The sweeper expired the action while it ran and has already reported it.
    fn swept(
        &self,
        action: &SpeculativeAction,
        started: Instant,
        error: Option<String>,
    ) -> PrefetchOutcome {
        PrefetchOutcome {
            swept: true,
            ..self.outcome(action, ActionStatus::Expired, started, false, error)
        }
    }
}

fn declared_eagerness(priority: ResourcePriority) -> Eagerness {
    match priority {
        ResourcePriority::High => Eagerness::Eager,
        ResourcePriority::Medium => Eagerness::Moderate,
        ResourcePriority::Low => Eagerness::Conservative,
    }
}
