use super::{CaptureError, ClassifierError, ConfigError, PrefetchError, SchedulerError};

/// Top-level error aggregating subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ForesightError {
    #[error("capture error: {0}")]
    Capture(#[from] CaptureError),

    #[error("classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    #[error("scheduler error: {0}")]
    Scheduler(#[from] SchedulerError),

    #[error("prefetch error: {0}")]
    Prefetch(#[from] PrefetchError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("runtime error: {0}")]
    Runtime(String),
}

pub type ForesightResult<T> = Result<T, ForesightError>;
