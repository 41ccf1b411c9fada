//! Error handling for Foresight.
//! One error enum per subsystem, `thiserror` only, aggregated into [`ForesightError`].

pub mod capture_error;
pub mod classifier_error;
pub mod config_error;
pub mod foresight_error;
pub mod prefetch_error;
pub mod scheduler_error;

pub use capture_error::CaptureError;
pub use classifier_error::ClassifierError;
pub use config_error::ConfigError;
pub use foresight_error::{ForesightError, ForesightResult};
pub use prefetch_error::PrefetchError;
pub use scheduler_error::SchedulerError;
