use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::{Destination, ResourcePriority, ResourceSpec};

/// Static resource lists per behavior category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StaticResources {
    /// Preloaded when the page exposes search elements.
    pub search: Vec<ResourceSpec>,
    pub contact: Vec<ResourceSpec>,
    /// Preloaded for async forms that declare validation.
    pub form_validation: Vec<ResourceSpec>,
    /// Preloaded for every async form near the viewport.
    pub form_async: Vec<ResourceSpec>,
    pub social: Vec<ResourceSpec>,
    pub exit: Vec<ResourceSpec>,
}

impl Default for StaticResources {
    fn default() -> Self {
        use Destination::{Data, Script, Style};
        use ResourcePriority::{High, Low, Medium};
        Self {
            search: vec![
                ResourceSpec::new("/js/search.js", Script, High),
                ResourceSpec::new("/api/search/suggestions", Data, Medium),
            ],
            contact: vec![
                ResourceSpec::new("/js/form-validation.js", Script, Medium),
                ResourceSpec::new("/css/forms.css", Style, Low),
            ],
            form_validation: vec![ResourceSpec::new("/js/form-validation.js", Script, Medium)],
            form_async: vec![ResourceSpec::new("/js/async-form.js", Script, Medium)],
            social: vec![
                ResourceSpec::new("/js/social-share.js", Script, Low),
                ResourceSpec::new("/api/social/counts", Data, Low),
            ],
            exit: vec![
                ResourceSpec::new("/js/exit-intent.js", Script, Medium),
                ResourceSpec::new("/api/exit-offers", Data, Medium),
            ],
        }
    }
}

/// Speculative scheduler configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SchedulerConfig {
    /// Base probability a prediction must exceed to be acted on.
    pub confidence_threshold: f64,
    pub eager_threshold: f64,
    pub moderate_threshold: f64,
    pub external_hint_threshold: f64,
    pub link_priority_threshold: f64,
    pub visibility_ratio_threshold: f64,
    pub navigation_top_n: usize,
    pub details_top_n: usize,
    pub media_top_n: usize,
    pub near_viewport_margin_px: f64,
    /// How strongly a low accuracy raises the effective threshold.
    pub feedback_gain: f64,
    pub target_accuracy: f64,
    /// Upper bound of the effective threshold.
    pub max_threshold: f64,
    /// Accuracy samples required before feedback kicks in.
    pub min_feedback_samples: u64,
    pub resources: StaticResources,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: defaults::DEFAULT_CONFIDENCE_THRESHOLD,
            eager_threshold: defaults::DEFAULT_EAGER_THRESHOLD,
            moderate_threshold: defaults::DEFAULT_MODERATE_THRESHOLD,
            external_hint_threshold: defaults::DEFAULT_EXTERNAL_HINT_THRESHOLD,
            link_priority_threshold: defaults::DEFAULT_LINK_PRIORITY_THRESHOLD,
            visibility_ratio_threshold: defaults::DEFAULT_VISIBILITY_RATIO_THRESHOLD,
            navigation_top_n: defaults::DEFAULT_NAVIGATION_TOP_N,
            details_top_n: defaults::DEFAULT_DETAILS_TOP_N,
            media_top_n: defaults::DEFAULT_MEDIA_TOP_N,
            near_viewport_margin_px: defaults::DEFAULT_NEAR_VIEWPORT_MARGIN_PX,
            feedback_gain: defaults::DEFAULT_FEEDBACK_GAIN,
            target_accuracy: defaults::DEFAULT_TARGET_ACCURACY,
            max_threshold: defaults::DEFAULT_MAX_THRESHOLD,
            min_feedback_samples: defaults::DEFAULT_MIN_FEEDBACK_SAMPLES,
            resources: StaticResources::default(),
        }
    }
}

impl SchedulerConfig {
    pub(crate) fn unit_fields(&self) -> [(&'static str, f64); 8] {
        [
            ("scheduler.confidence_threshold", self.confidence_threshold),
            ("scheduler.eager_threshold", self.eager_threshold),
            ("scheduler.moderate_threshold", self.moderate_threshold),
            ("scheduler.external_hint_threshold", self.external_hint_threshold),
            ("scheduler.link_priority_threshold", self.link_priority_threshold),
            ("scheduler.visibility_ratio_threshold", self.visibility_ratio_threshold),
            ("scheduler.target_accuracy", self.target_accuracy),
            ("scheduler.max_threshold", self.max_threshold),
        ]
    }
}
