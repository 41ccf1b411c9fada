use foresight_core::config::SchedulerConfig;
use foresight_core::Eagerness;

/// Map a confidence onto its eagerness tier. Both bounds are exclusive.
pub fn eagerness_for(confidence: f64, config: &SchedulerConfig) -> Eagerness {
    if confidence > config.eager_threshold {
        Eagerness::Eager
    } else if confidence > config.moderate_threshold {
        Eagerness::Moderate
    } else {
        Eagerness::Conservative
    }
}
