//! ForesightRuntime: explicit context object with `start` / `stop`.

use std::sync::atomic::AtomicU64;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use foresight_capture::EventCapture;
use foresight_classifier::{build_classifier, BehaviorClassifier, ClassifierWorker};
use foresight_core::errors::{ForesightError, ForesightResult};
use foresight_core::models::MetricsSnapshot;
use foresight_core::traits::{IClassifier, IMetricsSink, IPageSource, IPrefetchPlatform};
use foresight_core::ForesightConfig;
use foresight_features::FeatureExtractor;
use foresight_observability::tracing_setup::init_tracing_with_default;
use foresight_observability::{MetricsReporter, ObservabilityEngine};
use foresight_prefetch::{MonotonicClock, Prefetcher};
use foresight_scheduler::{ActionRegistry, SpeculativeScheduler};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::background::{run_reporter, run_sweeper};
use crate::cycle::CycleTask;
use crate::ingest::RuntimeHandle;

/// Lock the shared observability engine. A panicked prefetch task must not
/// take metrics down with it, so poisoning is ignored.
pub(crate) fn lock(engine: &Mutex<ObservabilityEngine>) -> MutexGuard<'_, ObservabilityEngine> {
    engine.lock().unwrap_or_else(PoisonError::into_inner)
}

struct Running {
    handle: RuntimeHandle,
    shutdown: watch::Sender<bool>,
    tasks: Vec<JoinHandle<()>>,
}

pub struct ForesightRuntime<P: IPrefetchPlatform> {
    config: ForesightConfig,
    classifier: Arc<dyn IClassifier>,
    platform: Arc<P>,
    page: Arc<dyn IPageSource>,
    sink: Arc<dyn IMetricsSink>,
    registry: ActionRegistry,
    observability: Arc<Mutex<ObservabilityEngine>>,
    clock: MonotonicClock,
    running: Option<Running>,
}

impl<P: IPrefetchPlatform> ForesightRuntime<P> {
    pub fn new(
        config: ForesightConfig,
        classifier: Arc<dyn IClassifier>,
        platform: Arc<P>,
        page: Arc<dyn IPageSource>,
        sink: Arc<dyn IMetricsSink>,
    ) -> ForesightResult<Self> {
        config.validate()?;
        Ok(Self {
            observability: Arc::new(Mutex::new(ObservabilityEngine::new(&config.observability))),
            config,
            classifier,
            platform,
            page,
            sink,
            registry: ActionRegistry::new(),
            clock: MonotonicClock::new(),
            running: None,
        })
    }

    /// Build with the classifier selected by `config.classifier`.
    pub fn from_config(
        config: ForesightConfig,
        platform: Arc<P>,
        page: Arc<dyn IPageSource>,
        sink: Arc<dyn IMetricsSink>,
    ) -> ForesightResult<Self> {
        let classifier = build_classifier(&config.classifier);
        Self::new(config, classifier, platform, page, sink)
    }

    /// Install the tracing subscriber configured under `observability`.
    pub fn init_tracing(config: &ForesightConfig) {
        init_tracing_with_default(&config.observability.log_level, config.observability.json_logs);
    }

    pub fn config(&self) -> &ForesightConfig {
        &self.config
    }

    pub fn registry(&self) -> &ActionRegistry {
        &self.registry
    }

    pub fn is_running(&self) -> bool {
        self.running.is_some()
    }

    /// Handle of the running pipeline.
    pub fn handle(&self) -> Option<RuntimeHandle> {
        self.running.as_ref().map(|running| running.handle.clone())
    }

    pub fn metrics_snapshot(&self) -> MetricsSnapshot {
        lock(&self.observability).snapshot()
    }

    pub fn metrics_json(&self) -> ForesightResult<serde_json::Value> {
        lock(&self.observability).snapshot_json()
    }

    /// Spawn the pipeline tasks. Must be called inside a tokio runtime.
    pub fn start(&mut self) -> ForesightResult<RuntimeHandle> {
        if self.running.is_some() {
            return Err(ForesightError::Runtime("already started".to_string()));
        }
        let config = &self.config;
        let (tx, rx) = mpsc::channel(config.capture.ingest_queue_capacity);
        let (shutdown, shutdown_rx) = watch::channel(false);
        let dropped = Arc::new(AtomicU64::new(0));
        let handle = RuntimeHandle::new(tx, Arc::clone(&dropped));

        let prefetcher = Prefetcher::new(
            Arc::clone(&self.platform),
            self.registry.clone(),
            config.prefetch.clone(),
            self.clock,
        );
        let classifier = BehaviorClassifier::new(Arc::clone(&self.classifier));
        let cycle = CycleTask {
            classifier_name: classifier.name().to_string(),
            capture: EventCapture::new(&config.capture),
            extractor: FeatureExtractor::new(config.features.clone()),
            worker: ClassifierWorker::spawn(classifier, config.classifier.worker_queue_capacity),
            scheduler: SpeculativeScheduler::new(config.scheduler.clone(), self.registry.clone()),
            prefetcher: prefetcher.clone(),
            page: Arc::clone(&self.page),
            observability: Arc::clone(&self.observability),
        };
        let reporter = MetricsReporter::new(
            Arc::clone(&self.sink),
            Duration::from_secs(config.observability.metrics_interval_secs),
        );

        let tasks = vec![
            tokio::spawn(cycle.run(rx, shutdown_rx.clone())),
            tokio::spawn(run_sweeper(
                prefetcher.clone(),
                Arc::clone(&self.observability),
                Duration::from_millis(config.prefetch.sweep_interval_ms),
                shutdown_rx.clone(),
            )),
            tokio::spawn(run_reporter(
                reporter,
                prefetcher,
                Arc::clone(&self.observability),
                dropped,
                shutdown_rx,
            )),
        ];

        info!(
            buffer = config.capture.buffer_capacity,
            ingest_queue = config.capture.ingest_queue_capacity,
            "foresight runtime started"
        );
        self.running = Some(Running {
            handle: handle.clone(),
            shutdown,
            tasks,
        });
        Ok(handle)
    }

    /// Signal shutdown and wait for the pipeline tasks. In-flight prefetches
    /// are left to settle on their own. No-op when not running.
    pub async fn stop(&mut self) {
        let Some(running) = self.running.take() else {
            return;
        };
        // Receivers only disappear once the tasks are gone.
        let _ = running.shutdown.send(true);
        for task in running.tasks {
            if let Err(e) = task.await {
                warn!(error = %e, "runtime task ended abnormally");
            }
        }
        info!("foresight runtime stopped");
    }
}
