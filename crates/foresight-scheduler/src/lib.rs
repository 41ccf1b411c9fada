//! # foresight-scheduler
//!
//! Turns ranked predictions into speculative actions.
//!
//! - [`CandidateResolver`]: category → concrete resources on the current page
//! - [`SpeculativeScheduler`]: threshold, eagerness tiers, per-cycle merging
//! - [`ActionRegistry`]: one live action per resource key, one-way status transitions

pub mod candidates;
pub mod eagerness;
pub mod engine;
pub mod hints;
pub mod link_priority;
pub mod registry;
pub mod threshold;

pub use candidates::{Candidate, CandidateResolver};
pub use engine::SpeculativeScheduler;
pub use hints::ExternalHint;
pub use registry::ActionRegistry;
