//! FeatureExtractor: window + environment → 15-slot feature vector.

use foresight_core::config::FeatureConfig;
use foresight_core::constants::FEATURE_COUNT;
use foresight_core::models::{EnvironmentSnapshot, FeatureSlot};
use foresight_core::{BehaviorRecord, FeatureVector};
use tracing::debug;

use crate::exploration::ExplorationSource;
use crate::signals::{context_signals, interaction_signals, temporal_signals};

/// Computes feature vectors. Deterministic in its inputs apart from the
/// exploration slot, which is disabled by configuring
/// [`ExplorationMode::Disabled`](foresight_core::config::ExplorationMode::Disabled).
#[derive(Debug)]
pub struct FeatureExtractor {
    config: FeatureConfig,
    exploration: ExplorationSource,
}

impl FeatureExtractor {
    pub fn new(config: FeatureConfig) -> Self {
        let exploration = ExplorationSource::from_mode(config.exploration);
        Self {
            config,
            exploration,
        }
    }

    pub fn with_exploration(config: FeatureConfig, exploration: ExplorationSource) -> Self {
        Self {
            config,
            exploration,
        }
    }

    /// Number of trailing records [`extract`](Self::extract) reads.
    pub fn window_size(&self) -> usize {
        self.config.window_size
    }

    /// Extract features from `window` (oldest first). Only the trailing
    /// `window_size` records are read; per-interaction signals use the last
    /// `sub_window_size`.
    pub fn extract(&mut self, window: &[BehaviorRecord], env: &EnvironmentSnapshot) -> FeatureVector {
        let window = tail(window, self.config.window_size);
        let recent = tail(window, self.config.sub_window_size);
        let d = &self.config.divisors;

        let mut raw = [0.0; FEATURE_COUNT];
        let mut set = |slot: FeatureSlot, value: f64| raw[slot.index()] = value;

        set(
            FeatureSlot::ScrollVelocity,
            interaction_signals::scroll_velocity(recent) / d.scroll_velocity,
        );
        set(
            FeatureSlot::ClickFrequency,
            interaction_signals::click_frequency(recent, env.now_ms, self.config.click_time_budget_ms)
                / d.click_frequency,
        );
        set(
            FeatureSlot::PointerMovement,
            interaction_signals::pointer_movement(recent) / d.pointer_movement,
        );
        set(FeatureSlot::DwellTime, interaction_signals::dwell_time(recent) / d.dwell_time);
        set(
            FeatureSlot::InteractionDiversity,
            interaction_signals::interaction_diversity(recent) / d.interaction_diversity,
        );
        set(FeatureSlot::Engagement, interaction_signals::engagement(recent));
        set(FeatureSlot::NavigationPattern, interaction_signals::navigation_pattern(recent));
        set(
            FeatureSlot::AttentionSpan,
            interaction_signals::attention_span(window, env.now_ms, env.page_hidden)
                / d.attention_span,
        );
        set(FeatureSlot::DeviceUsage, interaction_signals::device_usage(recent));
        set(FeatureSlot::TimeOfDay, temporal_signals::time_of_day(&env.local_time));
        set(
            FeatureSlot::PerformanceContext,
            context_signals::performance_context(env.heap) / d.performance_context,
        );
        set(FeatureSlot::NetworkCondition, context_signals::network_condition(&env.network));
        set(FeatureSlot::DeviceCapability, context_signals::device_capability(&env.device));
        set(FeatureSlot::Exploration, self.exploration.sample());
        set(FeatureSlot::Seasonality, temporal_signals::seasonality(&env.local_time));

        let vector = FeatureVector::from_raw(raw);
        debug!(records = window.len(), features = ?vector.as_slice(), "features extracted");
        vector
    }
}

fn tail(records: &[BehaviorRecord], n: usize) -> &[BehaviorRecord] {
    &records[records.len().saturating_sub(n)..]
}
