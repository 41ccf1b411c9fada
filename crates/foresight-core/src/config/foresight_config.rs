//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    CaptureConfig, ClassifierConfig, FeatureConfig, ObservabilityConfig, PrefetchConfig,
    SchedulerConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`FORESIGHT_*`)
/// 2. Config file passed to [`ForesightConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ForesightConfig {
    pub capture: CaptureConfig,
    pub features: FeatureConfig,
    pub classifier: ClassifierConfig,
    pub scheduler: SchedulerConfig,
    pub prefetch: PrefetchConfig,
    pub observability: ObservabilityConfig,
}

impl ForesightConfig {
    /// Load the file at `path` (defaults when it does not exist), apply env
    /// overrides, then validate.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?
        } else {
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML string. Missing sections and fields take their defaults.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply environment variable overrides.
    /// Pattern: `FORESIGHT_CAPTURE_BUFFER_CAPACITY`, `FORESIGHT_SCHEDULER_CONFIDENCE_THRESHOLD`, etc.
    /// Unparseable values are ignored.
    pub fn apply_env_overrides(&mut self) {
        override_from_env("FORESIGHT_CAPTURE_BUFFER_CAPACITY", &mut self.capture.buffer_capacity);
        override_from_env("FORESIGHT_CAPTURE_LOW_WATER_MARK", &mut self.capture.low_water_mark);
        override_from_env("FORESIGHT_CAPTURE_DEBOUNCE_MS", &mut self.capture.debounce_ms);
        override_from_env(
            "FORESIGHT_CAPTURE_INGEST_QUEUE_CAPACITY",
            &mut self.capture.ingest_queue_capacity,
        );
        override_from_env("FORESIGHT_FEATURES_WINDOW_SIZE", &mut self.features.window_size);
        override_from_env("FORESIGHT_CLASSIFIER_KIND", &mut self.classifier.kind);
        if let Ok(val) = std::env::var("FORESIGHT_CLASSIFIER_WEIGHTS_PATH") {
            self.classifier.weights_path = Some(val.into());
        }
        override_from_env(
            "FORESIGHT_SCHEDULER_CONFIDENCE_THRESHOLD",
            &mut self.scheduler.confidence_threshold,
        );
        override_from_env("FORESIGHT_SCHEDULER_FEEDBACK_GAIN", &mut self.scheduler.feedback_gain);
        override_from_env(
            "FORESIGHT_PREFETCH_CACHE_CAPACITY",
            &mut self.prefetch.cache_capacity,
        );
        override_from_env(
            "FORESIGHT_OBSERVABILITY_METRICS_INTERVAL_SECS",
            &mut self.observability.metrics_interval_secs,
        );
        if let Ok(val) = std::env::var("FORESIGHT_OBSERVABILITY_LOG_LEVEL") {
            self.observability.log_level = val;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in self.scheduler.unit_fields() {
            if !(0.0..=1.0).contains(&value) {
                return Err(invalid(field, "must be between 0.0 and 1.0"));
            }
        }
        if self.scheduler.eager_threshold <= self.scheduler.moderate_threshold {
            return Err(invalid(
                "scheduler.eager_threshold",
                "must be greater than scheduler.moderate_threshold",
            ));
        }
        if self.scheduler.max_threshold < self.scheduler.confidence_threshold {
            return Err(invalid(
                "scheduler.max_threshold",
                "must not be below scheduler.confidence_threshold",
            ));
        }
        if !(self.scheduler.feedback_gain.is_finite() && self.scheduler.feedback_gain >= 0.0) {
            return Err(invalid("scheduler.feedback_gain", "must be a non-negative number"));
        }
        if !(self.scheduler.near_viewport_margin_px.is_finite()
            && self.scheduler.near_viewport_margin_px >= 0.0)
        {
            return Err(invalid("scheduler.near_viewport_margin_px", "must be a non-negative number"));
        }

        let positive_counts = [
            ("capture.buffer_capacity", self.capture.buffer_capacity),
            ("capture.ingest_queue_capacity", self.capture.ingest_queue_capacity),
            ("features.window_size", self.features.window_size),
            ("features.sub_window_size", self.features.sub_window_size),
            ("classifier.worker_queue_capacity", self.classifier.worker_queue_capacity),
        ];
        for (field, value) in positive_counts {
            if value == 0 {
                return Err(invalid(field, "must be greater than 0"));
            }
        }
        if self.features.window_size > self.capture.buffer_capacity {
            return Err(invalid(
                "features.window_size",
                "must not exceed capture.buffer_capacity",
            ));
        }
        if self.features.sub_window_size > self.features.window_size {
            return Err(invalid("features.sub_window_size", "must not exceed features.window_size"));
        }
        if self.capture.low_water_mark > self.capture.buffer_capacity {
            return Err(invalid(
                "capture.low_water_mark",
                "must not exceed capture.buffer_capacity",
            ));
        }
        for (field, divisor) in self.features.divisors.all() {
            if !(divisor.is_finite() && divisor > 0.0) {
                return Err(invalid(field, "must be a positive number"));
            }
        }

        let positive_durations = [
            ("prefetch.prerender_lifetime_ms", self.prefetch.prerender_lifetime_ms),
            ("prefetch.preload_lifetime_ms", self.prefetch.preload_lifetime_ms),
            ("prefetch.warm_cache_lifetime_ms", self.prefetch.warm_cache_lifetime_ms),
            ("prefetch.prefetch_lifetime_ms", self.prefetch.prefetch_lifetime_ms),
            ("prefetch.cache_capacity", self.prefetch.cache_capacity),
            ("prefetch.cache_ttl_secs", self.prefetch.cache_ttl_secs),
            ("prefetch.sweep_interval_ms", self.prefetch.sweep_interval_ms),
            ("observability.metrics_interval_secs", self.observability.metrics_interval_secs),
        ];
        for (field, value) in positive_durations {
            if value == 0 {
                return Err(invalid(field, "must be greater than 0"));
            }
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn override_from_env<T: std::str::FromStr>(key: &str, target: &mut T) {
    if let Ok(val) = std::env::var(key) {
        if let Ok(v) = val.parse::<T>() {
            *target = v;
        }
    }
}
