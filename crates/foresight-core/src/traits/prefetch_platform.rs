use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::errors::PrefetchError;
use crate::models::{Destination, Eagerness};

/// A single low-priority fetch handed to the platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FetchRequest {
    pub url: String,
    pub destination: Destination,
    /// Priority hint derived from the action's eagerness tier.
    pub priority: Eagerness,
}

/// Network and speculation capabilities of the host platform.
///
/// Futures are `Send` so the prefetcher can drive each action on its own task.
pub trait IPrefetchPlatform: Send + Sync + 'static {
    /// Fetch a resource so the platform caches it.
    fn fetch(&self, request: FetchRequest) -> impl Future<Output = Result<(), PrefetchError>> + Send;

    /// Register a prerender speculation rule for `url`.
    fn add_speculation_rule(
        &self,
        url: &str,
        eagerness: Eagerness,
    ) -> impl Future<Output = Result<(), PrefetchError>> + Send;

    /// Whether speculation rules are available at all.
    fn supports_speculation_rules(&self) -> bool;
}
