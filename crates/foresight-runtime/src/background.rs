//! Periodic tasks: registry sweeping and metrics reporting.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use foresight_core::traits::IPrefetchPlatform;
use foresight_core::ActionStatus;
use foresight_observability::{MetricsReporter, ObservabilityEngine};
use foresight_prefetch::Prefetcher;
use tokio::sync::watch;
use tokio::time::{interval, MissedTickBehavior};
use tracing::debug;

use crate::runtime::lock;

/// Expire actions past their lifetime every `period`.
pub async fn run_sweeper<P: IPrefetchPlatform>(
    prefetcher: Prefetcher<P>,
    observability: Arc<Mutex<ObservabilityEngine>>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    loop {
        tokio::select! {
            biased;
            _ = shutdown.changed() => break,
            _ = ticker.tick() => {
                let report = prefetcher.sweep();
                if !report.expired.is_empty() {
                    lock(&observability)
                        .metrics
                        .prefetch
                        .record_swept(report.expired.len());
                }
            }
        }
    }
    debug!("sweeper stopped");
}

/// Emit a snapshot every reporter interval, and a final one on shutdown.
pub async fn run_reporter<P: IPrefetchPlatform>(
    mut reporter: MetricsReporter,
    prefetcher: Prefetcher<P>,
    observability: Arc<Mutex<ObservabilityEngine>>,
    dropped_ingest: Arc<AtomicU64>,
    mut shutdown: watch::Receiver<bool>,
) {
    let mut ticker = interval(reporter.interval());
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // The first tick completes immediately.
    ticker.tick().await;
    loop {
        tokio::select! {
            biased;
            _ = shutdown.changed() => break,
            _ = ticker.tick() => {
                let snapshot = sample(&prefetcher, &observability, &dropped_ingest);
                reporter.report(&snapshot);
            }
        }
    }
    let snapshot = sample(&prefetcher, &observability, &dropped_ingest);
    reporter.report(&snapshot);
    debug!(reports = reporter.reports(), "reporter stopped");
}

fn sample<P: IPrefetchPlatform>(
    prefetcher: &Prefetcher<P>,
    observability: &Mutex<ObservabilityEngine>,
    dropped_ingest: &AtomicU64,
) -> foresight_core::models::MetricsSnapshot {
    let registry = prefetcher.registry();
    let mut engine = lock(observability);
    engine
        .metrics
        .pipeline
        .set_registry(registry.len(), registry.count_with_status(ActionStatus::InFlight));
    engine.metrics.pipeline.dropped_ingest = dropped_ingest.load(Ordering::Relaxed);
    engine.snapshot()
}
