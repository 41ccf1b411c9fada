//! Accuracy feedback on the confidence threshold.

use foresight_core::config::SchedulerConfig;
use foresight_core::models::AccuracyMetric;

/// Threshold a prediction's probability must exceed this cycle.
///
/// Starts at `confidence_threshold`. Once the accuracy metric has
/// `min_feedback_samples` samples, every point of accuracy below
/// `target_accuracy` raises it by `feedback_gain`, up to `max_threshold`.
pub fn effective_threshold(config: &SchedulerConfig, accuracy: &AccuracyMetric) -> f64 {
    let base = config.confidence_threshold;
    if accuracy.samples() < config.min_feedback_samples {
        return base;
    }
    let shortfall = (config.target_accuracy - accuracy.value()).max(0.0);
    (base + config.feedback_gain * shortfall).min(config.max_threshold.max(base))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric(samples: u64, sample: f64) -> AccuracyMetric {
        let mut metric = AccuracyMetric::new();
        for _ in 0..samples {
            metric.record(sample);
        }
        metric
    }

    #[test]
    fn base_threshold_until_enough_samples() {
        let config = SchedulerConfig::default();
        assert_eq!(effective_threshold(&config, &metric(9, 0.0)), 0.6);
    }

    #[test]
    fn low_accuracy_raises_threshold() {
        let config = SchedulerConfig::default();
        // accuracy stays at 0 -> shortfall 0.5 -> +0.1
        let threshold = effective_threshold(&config, &metric(20, 0.0));
        assert!((threshold - 0.7).abs() < 1e-9);
    }

    #[test]
    fn accuracy_above_target_keeps_base() {
        let config = SchedulerConfig::default();
        let threshold = effective_threshold(&config, &metric(200, 1.0));
        assert!((threshold - 0.6).abs() < 1e-9);
    }

    #[test]
    fn threshold_is_capped() {
        let config = SchedulerConfig {
            feedback_gain: 10.0,
            ..SchedulerConfig::default()
        };
        assert!((effective_threshold(&config, &metric(20, 0.0)) - 0.95).abs() < 1e-9);
    }
}
