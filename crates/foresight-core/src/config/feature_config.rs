use serde::{Deserialize, Serialize};

use super::defaults;

/// How the exploration slot is filled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ExplorationMode {
    /// Uniform noise in `[0, 1)` from a thread-local RNG.
    Random,
    /// Deterministic noise from a seeded RNG.
    Seeded { seed: u64 },
    /// Slot pinned to 0.
    Disabled,
}

/// Fixed divisors mapping each raw feature onto `[0, 1]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureDivisors {
    pub scroll_velocity: f64,
    pub click_frequency: f64,
    pub pointer_movement: f64,
    pub dwell_time: f64,
    pub interaction_diversity: f64,
    pub attention_span: f64,
    pub performance_context: f64,
}

impl Default for FeatureDivisors {
    fn default() -> Self {
        Self {
            scroll_velocity: defaults::DEFAULT_SCROLL_VELOCITY_DIVISOR,
            click_frequency: defaults::DEFAULT_CLICK_FREQUENCY_DIVISOR,
            pointer_movement: defaults::DEFAULT_POINTER_MOVEMENT_DIVISOR,
            dwell_time: defaults::DEFAULT_DWELL_TIME_DIVISOR,
            interaction_diversity: defaults::DEFAULT_DIVERSITY_DIVISOR,
            attention_span: defaults::DEFAULT_ATTENTION_SPAN_DIVISOR,
            performance_context: defaults::DEFAULT_PERFORMANCE_CONTEXT_DIVISOR,
        }
    }
}

impl FeatureDivisors {
    pub(crate) fn all(&self) -> [(&'static str, f64); 7] {
        [
            ("features.divisors.scroll_velocity", self.scroll_velocity),
            ("features.divisors.click_frequency", self.click_frequency),
            ("features.divisors.pointer_movement", self.pointer_movement),
            ("features.divisors.dwell_time", self.dwell_time),
            ("features.divisors.interaction_diversity", self.interaction_diversity),
            ("features.divisors.attention_span", self.attention_span),
            ("features.divisors.performance_context", self.performance_context),
        ]
    }
}

/// Feature extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Trailing records fed into one extraction.
    pub window_size: usize,
    /// Most recent records used by per-interaction features.
    pub sub_window_size: usize,
    /// Look-back for click frequency, in milliseconds.
    pub click_time_budget_ms: u64,
    pub divisors: FeatureDivisors,
    pub exploration: ExplorationMode,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            window_size: defaults::DEFAULT_FEATURE_WINDOW,
            sub_window_size: defaults::DEFAULT_FEATURE_SUB_WINDOW,
            click_time_budget_ms: defaults::DEFAULT_CLICK_TIME_BUDGET_MS,
            divisors: FeatureDivisors::default(),
            exploration: ExplorationMode::Random,
        }
    }
}
