//! # foresight-features
//!
//! Maps a window of behavior records plus an environment snapshot onto a
//! fixed 15-slot [`FeatureVector`](foresight_core::FeatureVector).

pub mod engine;
pub mod exploration;
pub mod signals;

pub use engine::FeatureExtractor;
pub use exploration::ExplorationSource;
