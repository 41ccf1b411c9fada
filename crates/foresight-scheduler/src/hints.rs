use foresight_core::models::{BehaviorCategory, Destination};
use serde::{Deserialize, Serialize};

/// A prediction supplied from outside the local classifier, such as a
/// network-side worker that has its own model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalHint {
    pub category: BehaviorCategory,
    pub url: String,
    pub destination: Destination,
    pub confidence: f64,
}
