//! # foresight-core
//!
//! Foundation crate for the Foresight speculative rendering engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ForesightConfig;
pub use errors::{ForesightError, ForesightResult};
pub use models::{
    ActionKind, ActionStatus, BehaviorCategory, BehaviorKind, BehaviorRecord, Eagerness,
    FeatureVector, Prediction, SpeculativeAction,
};
