// Single source of truth for all default values.

// --- Capture ---
pub const DEFAULT_BUFFER_CAPACITY: usize = 200;
pub const DEFAULT_LOW_WATER_MARK: usize = 20;
pub const DEFAULT_DEBOUNCE_MS: u64 = 100;
pub const DEFAULT_INGEST_QUEUE_CAPACITY: usize = 1024;

// --- Features ---
pub const DEFAULT_FEATURE_WINDOW: usize = 20;
pub const DEFAULT_FEATURE_SUB_WINDOW: usize = 10;
pub const DEFAULT_CLICK_TIME_BUDGET_MS: u64 = 5_000;
pub const DEFAULT_SCROLL_VELOCITY_DIVISOR: f64 = 1_000.0; // px/s
pub const DEFAULT_CLICK_FREQUENCY_DIVISOR: f64 = 5.0; // clicks/s
pub const DEFAULT_POINTER_MOVEMENT_DIVISOR: f64 = 50_000.0; // px/s
pub const DEFAULT_DWELL_TIME_DIVISOR: f64 = 10_000.0; // ms
pub const DEFAULT_DIVERSITY_DIVISOR: f64 = 10.0;
pub const DEFAULT_ATTENTION_SPAN_DIVISOR: f64 = 30_000.0; // ms
pub const DEFAULT_PERFORMANCE_CONTEXT_DIVISOR: f64 = 100.0;

// --- Classifier ---
pub const DEFAULT_WORKER_QUEUE_CAPACITY: usize = 32;

// --- Scheduler ---
/// Predictions at or below this probability are ignored.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.6;
/// Confidence above this maps to `Eagerness::Eager`.
pub const DEFAULT_EAGER_THRESHOLD: f64 = 0.8;
/// Confidence above this (and not eager) maps to `Eagerness::Moderate`.
pub const DEFAULT_MODERATE_THRESHOLD: f64 = 0.6;
/// Externally supplied hints at or below this confidence are ignored.
pub const DEFAULT_EXTERNAL_HINT_THRESHOLD: f64 = 0.7;
/// Links at or below this priority are never speculated.
pub const DEFAULT_LINK_PRIORITY_THRESHOLD: f64 = 0.7;
pub const DEFAULT_VISIBILITY_RATIO_THRESHOLD: f64 = 0.5;
pub const DEFAULT_NAVIGATION_TOP_N: usize = 3;
pub const DEFAULT_DETAILS_TOP_N: usize = 2;
pub const DEFAULT_MEDIA_TOP_N: usize = 5;
pub const DEFAULT_NEAR_VIEWPORT_MARGIN_PX: f64 = 200.0;
pub const DEFAULT_FEEDBACK_GAIN: f64 = 0.2;
pub const DEFAULT_TARGET_ACCURACY: f64 = 0.5;
pub const DEFAULT_MAX_THRESHOLD: f64 = 0.95;
pub const DEFAULT_MIN_FEEDBACK_SAMPLES: u64 = 10;

// --- Prefetch ---
pub const DEFAULT_PRERENDER_LIFETIME_MS: u64 = 30_000;
pub const DEFAULT_PRELOAD_LIFETIME_MS: u64 = 30_000;
pub const DEFAULT_WARM_CACHE_LIFETIME_MS: u64 = 30_000;
pub const DEFAULT_PREFETCH_LIFETIME_MS: u64 = 60_000;
pub const DEFAULT_TERMINAL_RETENTION_MS: u64 = 60_000;
pub const DEFAULT_CACHE_CAPACITY: u64 = 500;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;
pub const DEFAULT_SWEEP_INTERVAL_MS: u64 = 1_000;

// --- Observability ---
pub const DEFAULT_METRICS_INTERVAL_SECS: u64 = 30;
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
pub const DEFAULT_ACCURACY_LOOKAHEAD: usize = 5;
