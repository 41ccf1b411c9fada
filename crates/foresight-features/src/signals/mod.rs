//! Raw signal computations feeding the feature vector.
//!
//! Three signal groups:
//! - Interaction signals: computed from the behavior window
//! - Context signals: network, device and memory readings
//! - Temporal signals: local clock

pub mod context_signals;
pub mod interaction_signals;
pub mod temporal_signals;
