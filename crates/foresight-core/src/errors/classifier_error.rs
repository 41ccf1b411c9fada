/// Behavior classifier errors. Degrade to "no predictions this cycle".
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifierError {
    #[error("model unavailable: {model}")]
    ModelUnavailable { model: String },

    #[error("model load failed: {path}: {reason}")]
    ModelLoadFailed { path: String, reason: String },

    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("invalid distribution: {reason}")]
    InvalidDistribution { reason: String },

    #[error("classifier worker closed")]
    WorkerClosed,
}
