//! Speculative actions and their lifecycle.
//!
//! State machine: `Queued -> InFlight -> {Completed | Failed}`, plus
//! `Queued | InFlight -> Expired`. Every transition is one-way.

use serde::{Deserialize, Serialize};

use super::prediction::BehaviorCategory;

/// Priority hint handed to the platform, derived from confidence bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Eagerness {
    Conservative,
    Moderate,
    Eager,
}

impl Eagerness {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Moderate => "moderate",
            Self::Eager => "eager",
        }
    }
}

/// What kind of resource a fetch is for (maps to a link `as` attribute).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Destination {
    Document,
    Script,
    Style,
    Image,
    Video,
    Data,
}

/// Declared priority of a static resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourcePriority {
    Low,
    Medium,
    High,
}

/// A statically configured resource candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSpec {
    pub url: String,
    pub destination: Destination,
    pub priority: ResourcePriority,
}

impl ResourceSpec {
    pub fn new(url: impl Into<String>, destination: Destination, priority: ResourcePriority) -> Self {
        Self {
            url: url.into(),
            destination,
            priority,
        }
    }
}

/// The side-effecting operation an action performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionKind {
    /// Register a prerender hint (speculation rule), falling back to a document prefetch.
    Prerender,
    /// Low-priority fetch of a page or media resource.
    Prefetch { destination: Destination },
    /// Fetch of a declared asset with its own priority.
    Preload {
        destination: Destination,
        priority: ResourcePriority,
    },
    /// Fill an in-process cache entry for a logical component.
    WarmCache,
}

impl ActionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Prerender => "prerender",
            Self::Prefetch { .. } => "prefetch",
            Self::Preload { .. } => "preload",
            Self::WarmCache => "warm_cache",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionStatus {
    Queued,
    InFlight,
    Completed,
    Failed,
    Expired,
}

impl ActionStatus {
    /// Terminal states never transition again.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Expired)
    }

    /// Whether `self -> next` is a legal transition.
    pub fn can_transition_to(self, next: ActionStatus) -> bool {
        matches!(
            (self, next),
            (Self::Queued, Self::InFlight)
                | (Self::InFlight, Self::Completed)
                | (Self::InFlight, Self::Failed)
                | (Self::Queued, Self::Expired)
                | (Self::InFlight, Self::Expired)
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::InFlight => "in_flight",
            Self::Completed => "completed",
            Self::Failed => "failed",
            Self::Expired => "expired",
        }
    }
}

/// One speculative fetch/prerender, keyed by `resource_key` in the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeculativeAction {
    /// URL or logical action id.
    pub resource_key: String,
    pub category: BehaviorCategory,
    pub confidence: f64,
    pub eagerness: Eagerness,
    pub kind: ActionKind,
    pub status: ActionStatus,
    /// Monotonic creation time in milliseconds.
    pub created_at_ms: u64,
    /// Monotonic time of the last status change.
    pub updated_at_ms: u64,
    /// Assigned by the registry on insert. Tells successive actions for the
    /// same key apart.
    pub generation: u64,
}

impl SpeculativeAction {
    /// A fresh `Queued` action.
    pub fn queued(
        resource_key: impl Into<String>,
        category: BehaviorCategory,
        confidence: f64,
        eagerness: Eagerness,
        kind: ActionKind,
        now_ms: u64,
    ) -> Self {
        Self {
            resource_key: resource_key.into(),
            category,
            confidence,
            eagerness,
            kind,
            status: ActionStatus::Queued,
            created_at_ms: now_ms,
            updated_at_ms: now_ms,
            generation: 0,
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn age_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.created_at_ms)
    }
}
