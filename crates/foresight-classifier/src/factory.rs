use std::sync::Arc;

use foresight_core::config::{ClassifierConfig, ClassifierKind};
use foresight_core::traits::IClassifier;
use tracing::info;

use crate::dense_network::DenseNetworkClassifier;
use crate::rule_based::RuleBasedClassifier;
use crate::uniform::UniformClassifier;

/// Instantiate the classifier selected by `config.kind`.
pub fn build_classifier(config: &ClassifierConfig) -> Arc<dyn IClassifier> {
    let classifier: Arc<dyn IClassifier> = match config.kind {
        ClassifierKind::Uniform => Arc::new(UniformClassifier),
        ClassifierKind::RuleBased => Arc::new(RuleBasedClassifier::default()),
        ClassifierKind::DenseNetwork => Arc::new(DenseNetworkClassifier::load_or_unavailable(
            config.weights_path.as_deref(),
        )),
    };
    info!(
        classifier = classifier.name(),
        available = classifier.is_available(),
        "classifier ready"
    );
    classifier
}
