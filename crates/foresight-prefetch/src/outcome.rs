use std::time::Duration;

use foresight_core::{ActionKind, ActionStatus};
use serde::Serialize;

/// How one execution of a speculative action ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrefetchOutcome {
    pub resource_key: String,
    pub generation: u64,
    pub kind: ActionKind,
    /// Status the action settled in. `Queued` means the action was never
    /// started because the registry rejected the `InFlight` transition.
    pub status: ActionStatus,
    #[serde(with = "duration_ms")]
    pub duration: Duration,
    /// Served from the warm cache without touching the platform.
    pub cache_hit: bool,
    pub error: Option<String>,
    /// The sweeper expired the action first. Its expiry is already counted
    /// through the sweep report.
    pub swept: bool,
}

impl PrefetchOutcome {
    pub fn is_completed(&self) -> bool {
        self.status == ActionStatus::Completed
    }

    /// Whether the action was actually run.
    pub fn was_started(&self) -> bool {
        self.status != ActionStatus::Queued
    }
}

mod duration_ms {
    use std::time::Duration;

    use serde::Serializer;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }
}
