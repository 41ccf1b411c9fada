//! [`ObservabilityEngine`]: owns the accuracy evaluator and the metrics collector.

use std::time::Duration;

use foresight_core::config::ObservabilityConfig;
use foresight_core::errors::ForesightResult;
use foresight_core::models::{AccuracyMetric, MetricsSnapshot};
use foresight_core::{ActionStatus, BehaviorRecord, Prediction};
use tracing::debug;

use crate::accuracy::AccuracyEvaluator;
use crate::metrics::MetricsCollector;

#[derive(Debug, Clone)]
pub struct ObservabilityEngine {
    pub evaluator: AccuracyEvaluator,
    pub metrics: MetricsCollector,
}

impl ObservabilityEngine {
    pub fn new(config: &ObservabilityConfig) -> Self {
        Self {
            evaluator: AccuracyEvaluator::new(config.accuracy_lookahead),
            metrics: MetricsCollector::new(),
        }
    }

    /// Current accuracy, as the scheduler's threshold feedback reads it.
    pub fn accuracy(&self) -> AccuracyMetric {
        self.metrics.prediction.accuracy
    }

    /// Score the previous cycle against `window` and hold `predictions` for
    /// the next one.
    pub fn record_predictions(
        &mut self,
        predictions: &[Prediction],
        at_ms: u64,
        window: &[BehaviorRecord],
    ) {
        if let Some(sample) = self.evaluator.begin_cycle(predictions, at_ms, window) {
            self.metrics.prediction.record_accuracy(sample);
            debug!(sample, accuracy = self.metrics.prediction.accuracy.value(), "accuracy updated");
        }
    }

    pub fn record_cycle(&mut self, predictions: usize, actions: usize) {
        self.metrics.prediction.record_cycle(predictions, actions);
    }

    pub fn record_outcome(&mut self, status: ActionStatus, duration: Duration, cache_hit: bool) {
        self.metrics.prefetch.record_outcome(status, duration, cache_hit);
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    pub fn snapshot_json(&self) -> ForesightResult<serde_json::Value> {
        self.metrics.snapshot_json()
    }
}

impl Default for ObservabilityEngine {
    fn default() -> Self {
        Self::new(&ObservabilityConfig::default())
    }
}
