//! Off-thread inference.
//!
//! A single blocking thread owns the classifier and serves requests from a
//! bounded channel. Feature vectors are copied in and predictions copied out.

use foresight_core::{FeatureVector, Prediction};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::engine::BehaviorClassifier;

struct Request {
    features: FeatureVector,
    reply: oneshot::Sender<Vec<Prediction>>,
}

/// Handle to the inference thread. Dropping every handle stops the thread.
pub struct ClassifierWorker {
    tx: mpsc::Sender<Request>,
    handle: JoinHandle<()>,
}

impl ClassifierWorker {
    /// Spawn the worker on tokio's blocking pool. Must be called inside a runtime.
    pub fn spawn(classifier: BehaviorClassifier, queue_capacity: usize) -> Self {
        let (tx, mut rx) = mpsc::channel::<Request>(queue_capacity.max(1));
        let handle = tokio::task::spawn_blocking(move || {
            debug!(classifier = classifier.name(), "classifier worker started");
            while let Some(request) = rx.blocking_recv() {
                let predictions = classifier.classify(&request.features);
                // The caller may have given up waiting.
                let _ = request.reply.send(predictions);
            }
            debug!("classifier worker stopped");
        });
        Self { tx, handle }
    }

    /// Classify on the worker thread. Empty when the queue is full or the
    /// worker is gone.
    pub async fn classify(&self, features: FeatureVector) -> Vec<Prediction> {
        let (reply, response) = oneshot::channel();
        if let Err(e) = self.tx.try_send(Request { features, reply }) {
            warn!(error = %e, "classifier worker unavailable; no predictions");
            return Vec::new();
        }
        response.await.unwrap_or_else(|_| {
            warn!("classifier worker dropped the request");
            Vec::new()
        })
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed() || self.handle.is_finished()
    }

    /// Close the request channel and wait for the thread to drain.
    pub async fn shutdown(self) {
        drop(self.tx);
        if let Err(e) = self.handle.await {
            warn!(error = %e, "classifier worker panicked");
        }
    }
}
