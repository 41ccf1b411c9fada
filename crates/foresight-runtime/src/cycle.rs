//! The prediction cycle task.
//!
//! Single consumer of the ingestion channel. Scheduling is synchronous
//! inside this task, so the registry's dedup check and insert never have
//! an await between them.

use std::sync::{Arc, Mutex};

use foresight_capture::{EventCapture, RawEvent};
use foresight_classifier::ClassifierWorker;
use foresight_core::models::VisibleElement;
use foresight_core::traits::{IPageSource, IPrefetchPlatform};
use foresight_core::{BehaviorRecord, SpeculativeAction};
use foresight_features::FeatureExtractor;
use foresight_observability::{
    capture_span, classification_span, extraction_span, scheduling_span, ObservabilityEngine,
};
use foresight_prefetch::Prefetcher;
use foresight_scheduler::{ExternalHint, SpeculativeScheduler};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, Instrument};

use crate::ingest::Ingest;
use crate::runtime::lock;

pub struct CycleTask<P: IPrefetchPlatform> {
    pub(crate) classifier_name: String,
    pub(crate) capture: EventCapture,
    pub(crate) extractor: FeatureExtractor,
    pub(crate) worker: ClassifierWorker,
    pub(crate) scheduler: SpeculativeScheduler,
    pub(crate) prefetcher: Prefetcher<P>,
    pub(crate) page: Arc<dyn IPageSource>,
    pub(crate) observability: Arc<Mutex<ObservabilityEngine>>,
}

impl<P: IPrefetchPlatform> CycleTask<P> {
    pub async fn run(mut self, mut rx: mpsc::Receiver<Ingest>, mut shutdown: watch::Receiver<bool>) {
        info!(classifier = %self.classifier_name, "cycle task started");
        loop {
            tokio::select! {
                biased;
                _ = shutdown.changed() => break,
                item = rx.recv() => match item {
                    Some(item) => self.handle(item).await,
                    None => break,
                },
            }
        }
        self.worker.shutdown().await;
        info!(observed = self.capture.stats().observed, "cycle task stopped");
    }

    async fn handle(&mut self, item: Ingest) {
        match item {
            Ingest::Event(raw) => self.on_event(raw).await,
            Ingest::Hints(hints) => self.on_hints(&hints),
            Ingest::Visible(element) => self.on_visible(&element),
        }
    }

    async fn on_event(&mut self, raw: RawEvent) {
        let outcome = {
            let _span = capture_span!(raw.event_type).entered();
            self.capture.observe_with_trigger(raw)
        };
        let stats = self.capture.stats();
        lock(&self.observability)
            .metrics
            .pipeline
            .set_buffer(self.capture.len(), stats.dropped);

        if let Some(outcome) = outcome {
            if outcome.trigger {
                self.run_cycle(outcome.record.timestamp_ms()).await;
            }
        }
    }

    /// capture window → features → predictions → accuracy feedback →
    /// actions → one prefetch task per new action.
    async fn run_cycle(&mut self, at_ms: u64) {
        let window: Vec<BehaviorRecord> = self.capture.window(self.extractor.window_size());
        let env = self.page.environment(at_ms);
        let features = {
            let _span = extraction_span!(window.len()).entered();
            self.extractor.extract(&window, &env)
        };

        let predictions = self
            .worker
            .classify(features)
            .instrument(classification_span!(self.classifier_name))
            .await;

        let page = self.page.page();
        let accuracy = {
            let mut observability = lock(&self.observability);
            observability.record_predictions(&predictions, at_ms, &window);
            observability.accuracy()
        };

        let actions = {
            let threshold = self.scheduler.threshold(&accuracy);
            let _span = scheduling_span!(predictions.len(), threshold).entered();
            self.scheduler
                .schedule(&predictions, &page, &accuracy, self.prefetcher.clock().now_ms())
        };
        lock(&self.observability).record_cycle(predictions.len(), actions.len());
        debug!(
            predictions = predictions.len(),
            actions = actions.len(),
            "prediction cycle finished"
        );
        self.dispatch(actions);
    }

    fn on_hints(&mut self, hints: &[ExternalHint]) {
        let now = self.prefetcher.clock().now_ms();
        let actions = self.scheduler.schedule_external(hints, now);
        self.dispatch(actions);
    }

    fn on_visible(&mut self, element: &VisibleElement) {
        let now = self.prefetcher.clock().now_ms();
        let actions = self.scheduler.schedule_visible_element(element, now);
        self.dispatch(actions);
    }

    fn dispatch(&self, actions: Vec<SpeculativeAction>) {
        for action in actions {
            let prefetcher = self.prefetcher.clone();
            let observability = Arc::clone(&self.observability);
            tokio::spawn(async move {
                let outcome = prefetcher.execute(action).await;
                if outcome.swept {
                    return;
                }
                lock(&observability).record_outcome(
                    outcome.status,
                    outcome.duration,
                    outcome.cache_hit,
                );
            });
        }
    }
}
