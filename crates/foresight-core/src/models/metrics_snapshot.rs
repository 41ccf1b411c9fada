use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read-only metrics surface handed to a reporting collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub prediction_accuracy: f64,
    pub cache_hit_rate: f64,
    /// Smoothed duration of completed speculative operations, in milliseconds.
    pub rendering_speed_ms: f64,
    pub behavior_data_points: usize,
    pub registry_size: usize,
    pub in_flight: usize,
    pub cycles: u64,
    pub dropped_records: u64,
    pub timestamp: DateTime<Utc>,
}
