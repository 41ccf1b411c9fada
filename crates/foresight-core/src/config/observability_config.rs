use serde::{Deserialize, Serialize};

use super::defaults;

/// Observability configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Metrics snapshot emission interval in seconds.
    pub metrics_interval_secs: u64,
    /// Log level: "trace", "debug", "info", "warn", "error".
    pub log_level: String,
    /// Emit JSON-formatted logs.
    pub json_logs: bool,
    /// Records after a cycle considered when scoring its predictions.
    pub accuracy_lookahead: usize,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_interval_secs: defaults::DEFAULT_METRICS_INTERVAL_SECS,
            log_level: defaults::DEFAULT_LOG_LEVEL.to_string(),
            json_logs: defaults::DEFAULT_JSON_LOGS,
            accuracy_lookahead: defaults::DEFAULT_ACCURACY_LOOKAHEAD,
        }
    }
}
