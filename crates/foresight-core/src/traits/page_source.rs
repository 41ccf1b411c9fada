use crate::models::{EnvironmentSnapshot, PageSnapshot};

/// Read-only view of the host page and its environment.
///
/// Called once per prediction cycle; implementations return owned copies so
/// the pipeline never holds a reference into host state.
pub trait IPageSource: Send + Sync {
    /// Candidate elements currently on the page.
    fn page(&self) -> PageSnapshot;

    /// Clock, network, device and memory readings at `now_ms`.
    fn environment(&self, now_ms: u64) -> EnvironmentSnapshot;
}
