pub mod classifier;
pub mod metrics_sink;
pub mod page_source;
pub mod prefetch_platform;

pub use classifier::IClassifier;
pub use metrics_sink::IMetricsSink;
pub use page_source::IPageSource;
pub use prefetch_platform::{FetchRequest, IPrefetchPlatform};
