/// Foresight version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of slots in a [`crate::models::FeatureVector`].
pub const FEATURE_COUNT: usize = 15;

/// Number of behavior categories a classifier distributes probability over.
pub const CATEGORY_COUNT: usize = 8;

/// Number of predictions kept per cycle.
pub const TOP_K: usize = 3;

/// Allowed deviation from 1.0 for a classifier's probability sum.
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// Smoothing factor for exponentially-weighted metrics (weight of the old value).
pub const EMA_DECAY: f64 = 0.9;
