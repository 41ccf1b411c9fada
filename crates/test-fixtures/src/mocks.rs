use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use foresight_core::errors::PrefetchError;
use foresight_core::models::{EnvironmentSnapshot, MetricsSnapshot, PageSnapshot};
use foresight_core::traits::{FetchRequest, IMetricsSink, IPageSource, IPrefetchPlatform};
use foresight_core::Eagerness;

use crate::builders::environment;

/// A call the mock platform received.
#[derive(Debug, Clone, PartialEq)]
pub enum PlatformCall {
    Fetch(FetchRequest),
    SpeculationRule { url: String, eagerness: Eagerness },
}

#[derive(Debug, Default)]
struct PlatformState {
    calls: Vec<PlatformCall>,
    failing: HashSet<String>,
}

/// In-memory platform. Records every call, fails configured URLs and can
/// delay each operation (use with paused tokio time).
#[derive(Debug, Clone, Default)]
pub struct MockPlatform {
    state: Arc<Mutex<PlatformState>>,
    speculation_rules: bool,
    delay: Option<Duration>,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_speculation_rules(mut self) -> Self {
        self.speculation_rules = true;
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn failing_on(self, url: &str) -> Self {
        self.state.lock().unwrap().failing.insert(url.to_string());
        self
    }

    pub fn calls(&self) -> Vec<PlatformCall> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn fetched_urls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                PlatformCall::Fetch(request) => Some(request.url),
                PlatformCall::SpeculationRule { .. } => None,
            })
            .collect()
    }

    async fn respond(&self, url: &str, call: PlatformCall) -> Result<(), PrefetchError> {
        let fails = {
            let mut state = self.state.lock().unwrap();
            state.calls.push(call);
            state.failing.contains(url)
        };
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if fails {
            Err(PrefetchError::Transient {
                resource: url.to_string(),
                reason: "mock failure".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

impl IPrefetchPlatform for MockPlatform {
    async fn fetch(&self, request: FetchRequest) -> Result<(), PrefetchError> {
        let url = request.url.clone();
        self.respond(&url, PlatformCall::Fetch(request)).await
    }

    async fn add_speculation_rule(&self, url: &str, eagerness: Eagerness) -> Result<(), PrefetchError> {
        if !self.speculation_rules {
            return Err(PrefetchError::Unsupported {
                capability: "speculation rules".to_string(),
            });
        }
        let call = PlatformCall::SpeculationRule {
            url: url.to_string(),
            eagerness,
        };
        self.respond(url, call).await
    }

    fn supports_speculation_rules(&self) -> bool {
        self.speculation_rules
    }
}

/// Page source returning a fixed snapshot.
#[derive(Debug, Clone, Default)]
pub struct StaticPageSource {
    page: PageSnapshot,
}

impl StaticPageSource {
    pub fn new(page: PageSnapshot) -> Self {
        Self { page }
    }
}

impl IPageSource for StaticPageSource {
    fn page(&self) -> PageSnapshot {
        self.page.clone()
    }

    fn environment(&self, now_ms: u64) -> EnvironmentSnapshot {
        environment(now_ms)
    }
}

/// Metrics sink that keeps every snapshot.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    snapshots: Arc<Mutex<Vec<MetricsSnapshot>>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshots(&self) -> Vec<MetricsSnapshot> {
        self.snapshots.lock().unwrap().clone()
    }
}

impl IMetricsSink for CollectingSink {
    fn emit(&self, snapshot: &MetricsSnapshot) {
        self.snapshots.lock().unwrap().push(snapshot.clone());
    }
}
