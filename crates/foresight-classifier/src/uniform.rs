use foresight_core::constants::CATEGORY_COUNT;
use foresight_core::errors::ClassifierError;
use foresight_core::traits::IClassifier;
use foresight_core::FeatureVector;

/// Stub classifier: every category gets `1/8`.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformClassifier;

impl IClassifier for UniformClassifier {
    fn name(&self) -> &str {
        "uniform"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn distribution(&self, _features: &FeatureVector) -> Result<[f64; CATEGORY_COUNT], ClassifierError> {
        Ok([1.0 / CATEGORY_COUNT as f64; CATEGORY_COUNT])
    }
}
