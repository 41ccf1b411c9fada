//! Cycle counts and rolling prediction accuracy.

use foresight_core::models::AccuracyMetric;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct PredictionMetrics {
    pub accuracy: AccuracyMetric,
    /// Prediction cycles run.
    pub cycles: u64,
    /// Cycles where the classifier produced nothing.
    pub empty_cycles: u64,
    /// Actions created across all cycles.
    pub actions_scheduled: u64,
}

impl PredictionMetrics {
    pub fn record_cycle(&mut self, predictions: usize, actions: usize) {
        self.cycles += 1;
        if predictions == 0 {
            self.empty_cycles += 1;
        }
        self.actions_scheduled += actions as u64;
    }

    pub fn record_accuracy(&mut self, sample: f64) {
        self.accuracy.record(sample);
    }
}
