//! Configuration for every pipeline stage, with compiled defaults in [`defaults`].

pub mod capture_config;
pub mod classifier_config;
pub mod defaults;
pub mod feature_config;
pub mod foresight_config;
pub mod observability_config;
pub mod prefetch_config;
pub mod scheduler_config;

pub use capture_config::CaptureConfig;
pub use classifier_config::{ClassifierConfig, ClassifierKind};
pub use feature_config::{ExplorationMode, FeatureConfig, FeatureDivisors};
pub use foresight_config::ForesightConfig;
pub use observability_config::ObservabilityConfig;
pub use prefetch_config::PrefetchConfig;
pub use scheduler_config::{SchedulerConfig, StaticResources};
