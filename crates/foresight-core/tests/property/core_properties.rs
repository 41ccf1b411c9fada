use foresight_core::constants::FEATURE_COUNT;
use foresight_core::models::AccuracyMetric;
use foresight_core::{ActionStatus, FeatureVector};
use proptest::prelude::*;

const STATUSES: [ActionStatus; 5] = [
    ActionStatus::Queued,
    ActionStatus::InFlight,
    ActionStatus::Completed,
    ActionStatus::Failed,
    ActionStatus::Expired,
];

fn any_f64() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1e9f64..1e9f64,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

proptest! {
    #[test]
    fn feature_vector_slots_always_in_unit_range(
        raw in prop::array::uniform15(any_f64())
    ) {
        let vector = FeatureVector::from_raw(raw);
        prop_assert_eq!(vector.len(), FEATURE_COUNT);
        for value in vector.as_slice() {
            prop_assert!((0.0..=1.0).contains(value), "slot out of range: {}", value);
        }
    }

    #[test]
    fn accuracy_metric_stays_in_unit_range(samples in prop::collection::vec(any_f64(), 0..200)) {
        let mut metric = AccuracyMetric::new();
        for sample in &samples {
            metric.record(*sample);
            prop_assert!((0.0..=1.0).contains(&metric.value()));
        }
        prop_assert_eq!(metric.samples(), samples.len() as u64);
    }

    #[test]
    fn terminal_statuses_never_transition(from in 0usize..5, to in 0usize..5) {
        let (from, to) = (STATUSES[from], STATUSES[to]);
        if from.is_terminal() {
            prop_assert!(!from.can_transition_to(to));
        }
        if from.can_transition_to(to) {
            prop_assert!(!to.can_transition_to(from));
        }
    }
}
