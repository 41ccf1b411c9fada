//! Hands metrics snapshots to the host's sink.

use std::sync::Arc;
use std::time::Duration;

use foresight_core::models::MetricsSnapshot;
use foresight_core::traits::IMetricsSink;
use tracing::info;

pub struct MetricsReporter {
    sink: Arc<dyn IMetricsSink>,
    interval: Duration,
    reports: u64,
}

impl MetricsReporter {
    pub fn new(sink: Arc<dyn IMetricsSink>, interval: Duration) -> Self {
        Self {
            sink,
            interval,
            reports: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn report(&mut self, snapshot: &MetricsSnapshot) {
        self.reports += 1;
        info!(
            accuracy = snapshot.prediction_accuracy,
            cache_hit_rate = snapshot.cache_hit_rate,
            rendering_speed_ms = snapshot.rendering_speed_ms,
            registry_size = snapshot.registry_size,
            cycles = snapshot.cycles,
            "metrics"
        );
        self.sink.emit(snapshot);
    }

    pub fn reports(&self) -> u64 {
        self.reports
    }
}

impl std::fmt::Debug for MetricsReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetricsReporter")
            .field("interval", &self.interval)
            .field("reports", &self.reports)
            .finish()
    }
}
