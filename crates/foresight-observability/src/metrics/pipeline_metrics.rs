//! Gauges sampled from capture and the registry.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct PipelineMetrics {
    /// Records currently in the behavior buffer.
    pub behavior_data_points: usize,
    /// Raw events rejected by capture.
    pub dropped_records: u64,
    /// Raw events lost to a full ingestion queue.
    pub dropped_ingest: u64,
    pub registry_size: usize,
    pub in_flight: usize,
}

impl PipelineMetrics {
    pub fn set_buffer(&mut self, data_points: usize, dropped_records: u64) {
        self.behavior_data_points = data_points;
        self.dropped_records = dropped_records;
    }

    pub fn set_registry(&mut self, registry_size: usize, in_flight: usize) {
        self.registry_size = registry_size;
        self.in_flight = in_flight;
    }
}
