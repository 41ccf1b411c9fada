//! Span definitions per pipeline stage: capture, extraction, classification,
//! scheduling, prefetch.

/// Create a capture span.
#[macro_export]
macro_rules! capture_span {
    ($event_type:expr) => {
        tracing::debug_span!("foresight.capture", event_type = %$event_type)
    };
}

/// Create a feature extraction span.
#[macro_export]
macro_rules! extraction_span {
    ($window:expr) => {
        tracing::info_span!("foresight.extraction", window = $window)
    };
}

/// Create a classification span.
#[macro_export]
macro_rules! classification_span {
    ($classifier:expr) => {
        tracing::info_span!("foresight.classification", classifier = %$classifier)
    };
}

/// Create a scheduling span.
#[macro_export]
macro_rules! scheduling_span {
    ($predictions:expr, $threshold:expr) => {
        tracing::info_span!(
            "foresight.scheduling",
            predictions = $predictions,
            threshold = $threshold
        )
    };
}

/// Create a prefetch span.
#[macro_export]
macro_rules! prefetch_span {
    ($resource:expr, $kind:expr) => {
        tracing::info_span!("foresight.prefetch", resource = %$resource, kind = %$kind)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const CAPTURE: &str = "foresight.capture";
    pub const EXTRACTION: &str = "foresight.extraction";
    pub const CLASSIFICATION: &str = "foresight.classification";
    pub const SCHEDULING: &str = "foresight.scheduling";
    pub const PREFETCH: &str = "foresight.prefetch";
}
