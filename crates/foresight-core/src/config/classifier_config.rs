use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Which classifier implementation backs the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierKind {
    Uniform,
    RuleBased,
    DenseNetwork,
}

impl std::str::FromStr for ClassifierKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" => Ok(Self::Uniform),
            "rule_based" | "rule-based" | "rules" => Ok(Self::RuleBased),
            "dense_network" | "dense-network" | "dense" => Ok(Self::DenseNetwork),
            other => Err(format!("unknown classifier kind: {other}")),
        }
    }
}

/// Behavior classifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub kind: ClassifierKind,
    /// JSON weights for [`ClassifierKind::DenseNetwork`].
    pub weights_path: Option<PathBuf>,
    /// Pending requests the inference worker accepts before callers get an empty result.
    pub worker_queue_capacity: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            kind: ClassifierKind::RuleBased,
            weights_path: None,
            worker_queue_capacity: defaults::DEFAULT_WORKER_QUEUE_CAPACITY,
        }
    }
}
