//! # foresight-classifier
//!
//! Maps feature vectors to ranked behavior-category predictions.
//!
//! Three [`IClassifier`](foresight_core::traits::IClassifier) variants:
//! - [`UniformClassifier`]: equal probability everywhere
//! - [`RuleBasedClassifier`]: weighted feature heuristics through softmax
//! - [`DenseNetworkClassifier`]: 15→32→16→8 feed-forward net with JSON weights
//!
//! [`BehaviorClassifier`] wraps any of them with validation and ranking, and
//! [`ClassifierWorker`] runs it on a dedicated blocking thread.

pub mod dense_network;
pub mod engine;
pub mod factory;
pub mod ranking;
pub mod rule_based;
pub mod uniform;
pub mod worker;

pub use dense_network::{DenseLayer, DenseNetworkClassifier, NetworkWeights};
pub use engine::BehaviorClassifier;
pub use factory::build_classifier;
pub use rule_based::RuleBasedClassifier;
pub use uniform::UniformClassifier;
pub use worker::ClassifierWorker;
