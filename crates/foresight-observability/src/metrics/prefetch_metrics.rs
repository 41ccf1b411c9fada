//! Action outcomes, warm-cache hit rate, speculative operation latency.

use std::time::Duration;

use foresight_core::constants::EMA_DECAY;
use foresight_core::ActionStatus;
use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct PrefetchMetrics {
    /// Smoothed share of started actions served from the warm cache.
    pub cache_hit_rate: f64,
    /// Smoothed duration of completed operations in milliseconds. Seeded by
    /// the first sample.
    pub rendering_speed_ms: f64,
    pub completed: u64,
    pub failed: u64,
    pub expired: u64,
    pub cache_hits: u64,
    /// Actions superseded or swept before they could start.
    pub not_started: u64,
}

impl PrefetchMetrics {
    pub fn record_outcome(&mut self, status: ActionStatus, duration: Duration, cache_hit: bool) {
        match status {
            ActionStatus::Completed => {
                self.completed += 1;
                self.record_duration(duration);
            }
            ActionStatus::Failed => self.failed += 1,
            ActionStatus::Expired => self.expired += 1,
            ActionStatus::Queued | ActionStatus::InFlight => {
                self.not_started += 1;
                return;
            }
        }
        if cache_hit {
            self.cache_hits += 1;
        }
        let sample = if cache_hit { 1.0 } else { 0.0 };
        self.cache_hit_rate = ema(self.cache_hit_rate, sample);
    }

    /// Count actions the sweeper expired without an outcome.
    pub fn record_swept(&mut self, expired: usize) {
        self.expired += expired as u64;
    }

    pub fn started(&self) -> u64 {
        self.completed + self.failed + self.expired
    }

    fn record_duration(&mut self, duration: Duration) {
        let ms = duration.as_secs_f64() * 1000.0;
        self.rendering_speed_ms = if self.completed <= 1 {
            ms
        } else {
            ema(self.rendering_speed_ms, ms)
        };
    }
}

fn ema(previous: f64, sample: f64) -> f64 {
    previous * EMA_DECAY + sample * (1.0 - EMA_DECAY)
}
