//! Heuristic classifier over named feature slots.

use foresight_core::constants::CATEGORY_COUNT;
use foresight_core::errors::ClassifierError;
use foresight_core::models::{BehaviorCategory, FeatureSlot};
use foresight_core::traits::IClassifier;
use foresight_core::FeatureVector;

use crate::ranking::softmax;

/// Scores each category as a weighted sum of feature slots and normalizes
/// the scores with softmax.
#[derive(Debug, Clone)]
pub struct RuleBasedClassifier {
    /// Multiplier applied to every score before softmax. Higher is sharper.
    sharpness: f64,
}

impl Default for RuleBasedClassifier {
    fn default() -> Self {
        Self { sharpness: 3.0 }
    }
}

impl RuleBasedClassifier {
    pub fn with_sharpness(sharpness: f64) -> Self {
        Self { sharpness }
    }

    fn score(category: BehaviorCategory, f: &FeatureVector) -> f64 {
        use FeatureSlot::*;
        let v = |slot| f.get(slot);
        match category {
            BehaviorCategory::Navigation => {
                0.9 * v(ClickFrequency) + 0.8 * v(NavigationPattern) + 0.3 * v(Engagement)
            }
            BehaviorCategory::Search => {
                0.7 * v(DwellTime) + 0.4 * v(Engagement) + 0.3 * (1.0 - v(PointerMovement))
                    - 0.3 * v(ScrollVelocity)
            }
            BehaviorCategory::Details => {
                0.8 * v(InteractionDiversity) + 0.4 * v(ClickFrequency) + 0.3 * v(DwellTime)
            }
            BehaviorCategory::Contact => 0.5 * v(DwellTime) + 0.4 * v(AttentionSpan),
            BehaviorCategory::Media => 1.2 * v(ScrollVelocity) + 0.3 * v(DeviceUsage),
            BehaviorCategory::Form => {
                0.9 * v(DwellTime) + 0.3 * v(Engagement) - 0.2 * v(ScrollVelocity)
            }
            BehaviorCategory::Social => 0.4 * v(Engagement) + 0.4 * v(DeviceUsage),
            BehaviorCategory::Exit => {
                1.2 * v(PointerMovement) + 0.4 * (1.0 - v(Engagement)) + 0.2 * v(AttentionSpan)
            }
        }
    }
}

impl IClassifier for RuleBasedClassifier {
    fn name(&self) -> &str {
        "rule_based"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn distribution(&self, features: &FeatureVector) -> Result<[f64; CATEGORY_COUNT], ClassifierError> {
        let mut logits = [0.0; CATEGORY_COUNT];
        for category in BehaviorCategory::ALL {
            logits[category.index()] = self.sharpness * Self::score(category, features);
        }
        Ok(softmax(&logits))
    }
}
