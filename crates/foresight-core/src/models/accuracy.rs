use serde::{Deserialize, Serialize};

use crate::constants::EMA_DECAY;

/// Exponentially-smoothed prediction accuracy in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccuracyMetric {
    value: f64,
    samples: u64,
    decay: f64,
}

impl AccuracyMetric {
    pub fn new() -> Self {
        Self::with_decay(EMA_DECAY)
    }

    /// `decay` is the weight kept by the previous value on each update.
    pub fn with_decay(decay: f64) -> Self {
        Self {
            value: 0.0,
            samples: 0,
            decay: decay.clamp(0.0, 1.0),
        }
    }

    /// Fold one observed accuracy sample into the running value.
    pub fn record(&mut self, sample: f64) {
        let sample = if sample.is_finite() {
            sample.clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.value = (self.value * self.decay + sample * (1.0 - self.decay)).clamp(0.0, 1.0);
        self.samples += 1;
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn samples(&self) -> u64 {
        self.samples
    }
}

impl Default for AccuracyMetric {
    fn default() -> Self {
        Self::new()
    }
}
