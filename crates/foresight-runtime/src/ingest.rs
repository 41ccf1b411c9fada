use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use foresight_capture::RawEvent;
use foresight_core::models::VisibleElement;
use foresight_scheduler::ExternalHint;
use tokio::sync::mpsc;
use tracing::debug;

/// Everything the host can push into the pipeline.
#[derive(Debug, Clone)]
pub enum Ingest {
    Event(RawEvent),
    Hints(Vec<ExternalHint>),
    Visible(VisibleElement),
}

/// Host-side handle. Never blocks and never errors: input that does not fit
/// in the queue is dropped and counted.
#[derive(Debug, Clone)]
pub struct RuntimeHandle {
    tx: mpsc::Sender<Ingest>,
    dropped: Arc<AtomicU64>,
}

impl RuntimeHandle {
    pub(crate) fn new(tx: mpsc::Sender<Ingest>, dropped: Arc<AtomicU64>) -> Self {
        Self { tx, dropped }
    }

    /// Queue a raw event. Returns whether it was accepted.
    pub fn ingest(&self, raw: RawEvent) -> bool {
        self.push(Ingest::Event(raw))
    }

    /// Queue predictions supplied from outside the local classifier.
    pub fn hint(&self, hints: Vec<ExternalHint>) -> bool {
        self.push(Ingest::Hints(hints))
    }

    /// Report an element that crossed the visibility threshold.
    pub fn element_visible(&self, element: VisibleElement) -> bool {
        self.push(Ingest::Visible(element))
    }

    /// Inputs lost to a full or closed queue.
    pub fn dropped(&self) -> u64 {
        self.dropped.load(Ordering::Relaxed)
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }

    fn push(&self, item: Ingest) -> bool {
        match self.tx.try_send(item) {
            Ok(()) => true,
            Err(e) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                debug!(error = %e, "ingest queue rejected input");
                false
            }
        }
    }
}
