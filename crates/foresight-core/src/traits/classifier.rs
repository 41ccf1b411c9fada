use crate::constants::CATEGORY_COUNT;
use crate::errors::ClassifierError;
use crate::models::FeatureVector;

/// Maps a feature vector to a probability distribution over behavior categories.
///
/// Implementations may return unnormalized scores; callers validate and
/// renormalize before ranking.
pub trait IClassifier: Send + Sync {
    /// Human-readable classifier name.
    fn name(&self) -> &str;

    /// Whether this classifier can currently produce output.
    fn is_available(&self) -> bool;

    /// Raw distribution indexed by `BehaviorCategory::index()`.
    fn distribution(&self, features: &FeatureVector) -> Result<[f64; CATEGORY_COUNT], ClassifierError>;
}
