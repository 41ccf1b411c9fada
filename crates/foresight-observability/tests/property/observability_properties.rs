use std::time::Duration;

use foresight_core::{ActionStatus, BehaviorCategory, BehaviorKind, Prediction};
use foresight_observability::accuracy::score;
use foresight_observability::metrics::PrefetchMetrics;
use proptest::prelude::*;
use test_fixtures::record;

fn status() -> impl Strategy<Value = ActionStatus> {
    prop_oneof![
        Just(ActionStatus::Queued),
        Just(ActionStatus::Completed),
        Just(ActionStatus::Failed),
        Just(ActionStatus::Expired),
    ]
}

proptest! {
    #[test]
    fn accuracy_samples_are_fractions(
        categories in prop::collection::vec(0usize..8, 1..4),
        kinds in prop::collection::vec(0usize..10, 0..6),
    ) {
        let predictions: Vec<_> = categories
            .iter()
            .filter_map(|i| BehaviorCategory::from_index(*i))
            .map(|c| Prediction::new(c, 0.5))
            .collect();
        let observed: Vec<_> = kinds
            .iter()
            .enumerate()
            .map(|(t, k)| record(BehaviorKind::ALL[*k], t as u64))
            .collect();
        let sample = score(&predictions, observed.iter()).unwrap();
        prop_assert!((0.0..=1.0).contains(&sample));
    }

    #[test]
    fn prefetch_rates_stay_bounded(
        outcomes in prop::collection::vec((status(), 0u64..5_000, any::<bool>()), 0..50),
    ) {
        let mut metrics = PrefetchMetrics::default();
        for (status, ms, hit) in outcomes {
            metrics.record_outcome(status, Duration::from_millis(ms), hit);
        }
        prop_assert!((0.0..=1.0).contains(&metrics.cache_hit_rate));
        prop_assert!(metrics.rendering_speed_ms >= 0.0 && metrics.rendering_speed_ms <= 5_000.0);
    }
}
