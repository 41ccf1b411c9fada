use foresight_core::config::SchedulerConfig;
use foresight_core::models::{AccuracyMetric, ElementRect, LinkElement, PageSnapshot};
use foresight_core::{ActionStatus, BehaviorCategory, Prediction};
use foresight_scheduler::eagerness::eagerness_for;
use foresight_scheduler::{ActionRegistry, SpeculativeScheduler};
use proptest::prelude::*;

fn page(link_count: usize) -> PageSnapshot {
    PageSnapshot {
        viewport_width: 1024.0,
        viewport_height: 768.0,
        links: (0..link_count)
            .map(|i| LinkElement {
                href: format!("/page/{i}"),
                same_origin: true,
                in_nav: true,
                recently_hovered: i % 2 == 0,
                rect: ElementRect::new(0.0, 0.0, 40.0, 20.0),
            })
            .collect(),
        has_search_elements: true,
        ..PageSnapshot::default()
    }
}

fn prediction() -> impl Strategy<Value = Prediction> {
    (0usize..8, 0.0f64..=1.0).prop_map(|(i, p)| {
        Prediction::new(BehaviorCategory::from_index(i).unwrap_or(BehaviorCategory::Exit), p)
    })
}

proptest! {
    #[test]
    fn at_most_one_live_action_per_key(
        cycles in prop::collection::vec(prop::collection::vec(prediction(), 0..4), 1..8),
        links in 0usize..6,
    ) {
        let scheduler = SpeculativeScheduler::new(SchedulerConfig::default(), ActionRegistry::new());
        let page = page(links);
        let mut created = 0;
        for (i, predictions) in cycles.iter().enumerate() {
            created += scheduler
                .schedule(predictions, &page, &AccuracyMetric::new(), i as u64 * 100)
                .len();
        }
        let registry = scheduler.registry();
        prop_assert_eq!(created, registry.len());
        prop_assert_eq!(registry.live_count(), registry.count_with_status(ActionStatus::Queued));
    }

    #[test]
    fn eagerness_is_monotonic(a in 0.0f64..=1.0, b in 0.0f64..=1.0) {
        let config = SchedulerConfig::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(eagerness_for(lo, &config) <= eagerness_for(hi, &config));
    }

    #[test]
    fn created_actions_clear_the_threshold(predictions in prop::collection::vec(prediction(), 0..8)) {
        let scheduler = SpeculativeScheduler::new(SchedulerConfig::default(), ActionRegistry::new());
        let accuracy = AccuracyMetric::new();
        let threshold = scheduler.threshold(&accuracy);
        for action in scheduler.schedule(&predictions, &page(3), &accuracy, 0) {
            prop_assert!(action.confidence > threshold);
        }
    }
}
