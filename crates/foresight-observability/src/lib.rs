//! # foresight-observability
//!
//! Prediction accuracy evaluation against subsequent interactions, metrics
//! collection (prediction, prefetch, pipeline), structured tracing with span
//! definitions, and periodic snapshot reporting.

pub mod accuracy;
pub mod engine;
pub mod metrics;
pub mod reporter;
pub mod tracing_setup;

pub use accuracy::AccuracyEvaluator;
pub use engine::ObservabilityEngine;
pub use metrics::MetricsCollector;
pub use reporter::MetricsReporter;
