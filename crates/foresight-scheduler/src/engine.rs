//! SpeculativeScheduler: predictions in, newly registered actions out.

use foresight_core::config::SchedulerConfig;
use foresight_core::models::{AccuracyMetric, PageSnapshot, VisibleElement};
use foresight_core::{ActionKind, Prediction, SpeculativeAction};
use tracing::{debug, instrument};

use crate::candidates::{merge_by_key, Candidate, CandidateResolver};
use crate::eagerness::eagerness_for;
use crate::hints::ExternalHint;
use crate::registry::ActionRegistry;
use crate::threshold::effective_threshold;

/// Owns action creation. The prefetcher only moves status through the
/// shared [`ActionRegistry`].
#[derive(Debug, Clone)]
pub struct SpeculativeScheduler {
    config: SchedulerConfig,
    resolver: CandidateResolver,
    registry: ActionRegistry,
}

impl SpeculativeScheduler {
    pub fn new(config: SchedulerConfig, registry: ActionRegistry) -> Self {
        Self {
            resolver: CandidateResolver::new(config.clone()),
            config,
            registry,
        }
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Threshold in force for the given accuracy.
    pub fn threshold(&self, accuracy: &AccuracyMetric) -> f64 {
        effective_threshold(&self.config, accuracy)
    }

    /// Register actions for every prediction above the effective threshold.
    /// Returns only the actions created by this call.
    #[instrument(skip_all, fields(predictions = predictions.len()))]
    pub fn schedule(
        &self,
        predictions: &[Prediction],
        page: &PageSnapshot,
        accuracy: &AccuracyMetric,
        now_ms: u64,
    ) -> Vec<SpeculativeAction> {
        let threshold = self.threshold(accuracy);
        let candidates: Vec<Candidate> = predictions
            .iter()
            .filter(|p| p.probability > threshold)
            .flat_map(|p| self.resolver.resolve(p.category, p.probability, page))
            .collect();
        let created = self.admit(candidates, now_ms);
        debug!(threshold, created = created.len(), "scheduled predictions");
        created
    }

    /// Register prefetches for externally supplied hints above
    /// `external_hint_threshold`.
    pub fn schedule_external(&self, hints: &[ExternalHint], now_ms: u64) -> Vec<SpeculativeAction> {
        let candidates = hints
            .iter()
            .filter(|h| h.confidence > self.config.external_hint_threshold && !h.url.is_empty())
            .map(|h| Candidate {
                resource_key: h.url.clone(),
                category: h.category,
                kind: ActionKind::Prefetch {
                    destination: h.destination,
                },
                confidence: h.confidence,
            })
            .collect();
        self.admit(candidates, now_ms)
    }

    /// Register work for an element that crossed the visibility threshold.
    pub fn schedule_visible_element(
        &self,
        element: &VisibleElement,
        now_ms: u64,
    ) -> Vec<SpeculativeAction> {
        self.admit(self.resolver.resolve_visible(element), now_ms)
    }

    fn admit(&self, candidates: Vec<Candidate>, now_ms: u64) -> Vec<SpeculativeAction> {
        merge_by_key(candidates)
            .into_iter()
            .filter_map(|c| {
                let eagerness = eagerness_for(c.confidence, &self.config);
                let action = SpeculativeAction::queued(
                    c.resource_key,
                    c.category,
                    c.confidence,
                    eagerness,
                    c.kind,
                    now_ms,
                );
                self.registry.try_insert(action)
            })
            .collect()
    }
}
