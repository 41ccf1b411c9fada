use serde::{Deserialize, Serialize};

use super::defaults;

/// Event capture configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
    /// Ring buffer capacity; the oldest record is evicted beyond this.
    pub buffer_capacity: usize,
    /// Buffer length at which prediction cycles start firing.
    pub low_water_mark: usize,
    /// Minimum spacing between two prediction triggers, in milliseconds.
    pub debounce_ms: u64,
    /// Capacity of the runtime's raw-event ingestion queue.
    pub ingest_queue_capacity: usize,
}

impl Default for CaptureConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: defaults::DEFAULT_BUFFER_CAPACITY,
            low_water_mark: defaults::DEFAULT_LOW_WATER_MARK,
            debounce_ms: defaults::DEFAULT_DEBOUNCE_MS,
            ingest_queue_capacity: defaults::DEFAULT_INGEST_QUEUE_CAPACITY,
        }
    }
}
