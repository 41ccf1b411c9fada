use std::sync::Arc;

use foresight_classifier::ranking::normalize;
use foresight_classifier::{BehaviorClassifier, RuleBasedClassifier};
use foresight_core::FeatureVector;
use proptest::prelude::*;

proptest! {
    #[test]
    fn rule_based_distribution_sums_to_one(raw in prop::array::uniform15(0.0f64..=1.0)) {
        let classifier = BehaviorClassifier::new(Arc::new(RuleBasedClassifier::default()));
        let dist = classifier.try_distribution(&FeatureVector::from_raw(raw)).unwrap();
        prop_assert!(dist.iter().all(|p| *p >= 0.0));
        prop_assert!((dist.iter().sum::<f64>() - 1.0).abs() <= 1e-6);
    }

    #[test]
    fn predictions_are_ranked(raw in prop::array::uniform15(0.0f64..=1.0)) {
        let classifier = BehaviorClassifier::new(Arc::new(RuleBasedClassifier::default()));
        let predictions = classifier.classify(&FeatureVector::from_raw(raw));
        prop_assert_eq!(predictions.len(), 3);
        for pair in predictions.windows(2) {
            prop_assert!(
                pair[0].probability > pair[1].probability
                    || (pair[0].probability == pair[1].probability
                        && pair[0].category.index() < pair[1].category.index())
            );
        }
    }

    #[test]
    fn normalized_distributions_sum_to_one(raw in prop::array::uniform8(0.0f64..1e6)) {
        prop_assume!(raw.iter().sum::<f64>() > 0.0);
        let dist = normalize(raw).unwrap();
        prop_assert!((dist.iter().sum::<f64>() - 1.0).abs() <= 1e-6);
    }
}
