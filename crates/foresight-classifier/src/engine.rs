//! BehaviorClassifier: guards an `IClassifier` and ranks its output.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use foresight_core::constants::TOP_K;
use foresight_core::errors::ClassifierError;
use foresight_core::traits::IClassifier;
use foresight_core::{FeatureVector, Prediction};
use tracing::{debug, warn};

use crate::ranking::{normalize, top_k};

/// Wraps a classifier so that every failure mode (unavailable, error,
/// panic, invalid output) becomes an empty prediction list.
#[derive(Clone)]
pub struct BehaviorClassifier {
    inner: Arc<dyn IClassifier>,
}

impl std::fmt::Debug for BehaviorClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BehaviorClassifier")
            .field("inner", &self.inner.name())
            .finish()
    }
}

impl BehaviorClassifier {
    pub fn new(inner: Arc<dyn IClassifier>) -> Self {
        Self { inner }
    }

    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Normalized distribution, or the reason none could be produced.
    pub fn try_distribution(
        &self,
        features: &FeatureVector,
    ) -> Result<[f64; foresight_core::constants::CATEGORY_COUNT], ClassifierError> {
        if !self.inner.is_available() {
            return Err(ClassifierError::ModelUnavailable {
                model: self.inner.name().to_string(),
            });
        }
        let raw = catch_unwind(AssertUnwindSafe(|| self.inner.distribution(features))).map_err(
            |_| ClassifierError::InferenceFailed {
                reason: "classifier panicked".to_string(),
            },
        )??;
        normalize(raw)
    }

    /// Top-3 predictions, descending by probability, ties by category
    /// index. Empty when the classifier cannot produce a valid distribution.
    pub fn classify(&self, features: &FeatureVector) -> Vec<Prediction> {
        match self.try_distribution(features) {
            Ok(distribution) => {
                let predictions = top_k(&distribution, TOP_K);
                debug!(classifier = self.inner.name(), ?predictions, "classified");
                predictions
            }
            Err(ClassifierError::ModelUnavailable { model }) => {
                debug!(model, "classifier unavailable; no predictions");
                Vec::new()
            }
            Err(e) => {
                warn!(classifier = self.inner.name(), error = %e, "classification failed");
                Vec::new()
            }
        }
    }
}
