//! Feed-forward network classifier with externally supplied weights.
//!
//! Topology is fixed at 15 → 32 → 16 → 8: ReLU on the hidden layers,
//! softmax on the output. Inference only.

use std::path::Path;

use foresight_core::constants::{CATEGORY_COUNT, FEATURE_COUNT};
use foresight_core::errors::ClassifierError;
use foresight_core::traits::IClassifier;
use foresight_core::FeatureVector;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::ranking::softmax;

/// Layer widths from input to output.
pub const TOPOLOGY: [usize; 4] = [FEATURE_COUNT, 32, 16, CATEGORY_COUNT];

/// One fully connected layer. `weights[o][i]` connects input `i` to output `o`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenseLayer {
    pub weights: Vec<Vec<f64>>,
    pub biases: Vec<f64>,
}

impl DenseLayer {
    fn outputs(&self) -> usize {
        self.weights.len()
    }

    fn forward(&self, input: &[f64]) -> Vec<f64> {
        self.weights
            .iter()
            .zip(&self.biases)
            .map(|(row, bias)| row.iter().zip(input).map(|(w, x)| w * x).sum::<f64>() + bias)
            .collect()
    }
}

/// Serialized network weights, as loaded from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkWeights {
    pub layers: Vec<DenseLayer>,
}

impl NetworkWeights {
    /// Check the layer shapes against [`TOPOLOGY`] and reject non-finite weights.
    pub fn validate(&self) -> Result<(), ClassifierError> {
        let expected_layers = TOPOLOGY.len() - 1;
        if self.layers.len() != expected_layers {
            return Err(mismatch(format!(
                "expected {expected_layers} layers, found {}",
                self.layers.len()
            )));
        }
        for (index, layer) in self.layers.iter().enumerate() {
            let (inputs, outputs) = (TOPOLOGY[index], TOPOLOGY[index + 1]);
            if layer.outputs() != outputs || layer.biases.len() != outputs {
                return Err(mismatch(format!("layer {index}: expected {outputs} outputs")));
            }
            if layer.weights.iter().any(|row| row.len() != inputs) {
                return Err(mismatch(format!("layer {index}: expected {inputs} inputs per row")));
            }
            let finite = layer
                .weights
                .iter()
                .flatten()
                .chain(&layer.biases)
                .all(|w| w.is_finite());
            if !finite {
                return Err(mismatch(format!("layer {index}: non-finite weight")));
            }
        }
        Ok(())
    }
}

fn mismatch(reason: String) -> ClassifierError {
    ClassifierError::ModelLoadFailed {
        path: "<weights>".to_string(),
        reason,
    }
}

/// Dense network classifier. Unavailable when its weights could not be loaded.
#[derive(Debug, Clone)]
pub struct DenseNetworkClassifier {
    layers: Option<Vec<DenseLayer>>,
}

impl DenseNetworkClassifier {
    pub fn from_weights(weights: NetworkWeights) -> Result<Self, ClassifierError> {
        weights.validate()?;
        Ok(Self {
            layers: Some(weights.layers),
        })
    }

    pub fn from_json(json: &str) -> Result<Self, ClassifierError> {
        let weights: NetworkWeights =
            serde_json::from_str(json).map_err(|e| ClassifierError::ModelLoadFailed {
                path: "<string>".to_string(),
                reason: e.to_string(),
            })?;
        Self::from_weights(weights)
    }

    pub fn load(path: &Path) -> Result<Self, ClassifierError> {
        let load_failed = |reason: String| ClassifierError::ModelLoadFailed {
            path: path.display().to_string(),
            reason,
        };
        let json = std::fs::read_to_string(path).map_err(|e| load_failed(e.to_string()))?;
        Self::from_json(&json).map_err(|e| match e {
            ClassifierError::ModelLoadFailed { reason, .. } => load_failed(reason),
            other => other,
        })
    }

    /// Load from `path`, or an unavailable classifier when loading fails.
    pub fn load_or_unavailable(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            warn!("dense network selected without a weights path; classifier unavailable");
            return Self::unavailable();
        };
        Self::load(path).unwrap_or_else(|e| {
            warn!(error = %e, "dense network weights failed to load; classifier unavailable");
            Self::unavailable()
        })
    }

    pub fn unavailable() -> Self {
        Self { layers: None }
    }
}

impl IClassifier for DenseNetworkClassifier {
    fn name(&self) -> &str {
        "dense_network"
    }

    fn is_available(&self) -> bool {
        self.layers.is_some()
    }

    fn distribution(&self, features: &FeatureVector) -> Result<[f64; CATEGORY_COUNT], ClassifierError> {
        let layers = self.layers.as_ref().ok_or_else(|| ClassifierError::ModelUnavailable {
            model: self.name().to_string(),
        })?;

        let mut activation = features.as_slice().to_vec();
        let last = layers.len().saturating_sub(1);
        for (index, layer) in layers.iter().enumerate() {
            activation = layer.forward(&activation);
            if index < last {
                activation.iter_mut().for_each(|a| *a = a.max(0.0));
            }
        }

        let logits: [f64; CATEGORY_COUNT] =
            activation
                .try_into()
                .map_err(|out: Vec<f64>| ClassifierError::InferenceFailed {
                    reason: format!("output layer produced {} values", out.len()),
                })?;
        Ok(softmax(&logits))
    }
}
