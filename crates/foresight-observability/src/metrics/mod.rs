//! Central metrics registry.
//!
//! [`MetricsCollector`] owns the domain collectors and turns them into a
//! read-only [`MetricsSnapshot`].

pub mod pipeline_metrics;
pub mod prediction_metrics;
pub mod prefetch_metrics;

pub use pipeline_metrics::PipelineMetrics;
pub use prediction_metrics::PredictionMetrics;
pub use prefetch_metrics::PrefetchMetrics;

use chrono::Utc;
use foresight_core::errors::ForesightResult;
use foresight_core::models::MetricsSnapshot;

#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct MetricsCollector {
    pub prediction: PredictionMetrics,
    pub prefetch: PrefetchMetrics,
    pub pipeline: PipelineMetrics,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            prediction_accuracy: self.prediction.accuracy.value(),
            cache_hit_rate: self.prefetch.cache_hit_rate,
            rendering_speed_ms: self.prefetch.rendering_speed_ms,
            behavior_data_points: self.pipeline.behavior_data_points,
            registry_size: self.pipeline.registry_size,
            in_flight: self.pipeline.in_flight,
            cycles: self.prediction.cycles,
            dropped_records: self.pipeline.dropped_records,
            timestamp: Utc::now(),
        }
    }

    /// Full collector state as JSON, for hosts that persist or ship it.
    pub fn snapshot_json(&self) -> ForesightResult<serde_json::Value> {
        let snapshot = serde_json::to_value(self.snapshot())?;
        let detail = serde_json::to_value(self)?;
        Ok(serde_json::json!({
            "snapshot": snapshot,
            "detail": detail,
        }))
    }

    /// Reset all metrics.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
