//! Domain models shared across the pipeline.

pub mod accuracy;
pub mod action;
pub mod behavior;
pub mod environment;
pub mod feature_vector;
pub mod metrics_snapshot;
pub mod page;
pub mod prediction;

pub use accuracy::AccuracyMetric;
pub use action::{
    ActionKind, ActionStatus, Destination, Eagerness, ResourcePriority, ResourceSpec,
    SpeculativeAction,
};
pub use behavior::{
    BehaviorKind, BehaviorRecord, BehaviorRecordBuilder, DeviceContext, Point, RecordDetail,
    TargetDescriptor, Viewport,
};
pub use environment::{
    DeviceInfo, EffectiveConnectionType, EnvironmentSnapshot, HeapUsage, NetworkInfo,
};
pub use feature_vector::{FeatureSlot, FeatureVector};
pub use metrics_snapshot::MetricsSnapshot;
pub use page::{
    DetailItem, ElementRect, FormElement, LinkElement, MediaElement, MediaKind, PageSnapshot,
    VisibleElement,
};
pub use prediction::{BehaviorCategory, Prediction};
