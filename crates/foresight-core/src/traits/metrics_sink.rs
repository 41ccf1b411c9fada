use crate::models::MetricsSnapshot;

/// Receives periodic metrics snapshots.
pub trait IMetricsSink: Send + Sync {
    fn emit(&self, snapshot: &MetricsSnapshot);
}
