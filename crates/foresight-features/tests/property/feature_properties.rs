use chrono::NaiveDate;
use foresight_core::config::FeatureConfig;
use foresight_core::models::{
    DeviceInfo, EnvironmentSnapshot, HeapUsage, NetworkInfo, RecordDetail, TargetDescriptor,
};
use foresight_core::{BehaviorKind, BehaviorRecord};
use foresight_features::FeatureExtractor;
use proptest::prelude::*;

fn arb_kind() -> impl Strategy<Value = BehaviorKind> {
    prop::sample::select(BehaviorKind::ALL.to_vec())
}

fn arb_record() -> impl Strategy<Value = BehaviorRecord> {
    (
        arb_kind(),
        0u64..1_000_000,
        prop::option::of((-1e6f64..1e6, -1e6f64..1e6)),
        -1e7f64..1e7,
        prop::sample::select(vec!["a", "button", "input", "div"]),
        0u32..5,
        any::<bool>(),
    )
        .prop_map(|(kind, ts, coords, scroll_y, tag, touch_points, hidden)| {
            let mut builder = BehaviorRecord::builder(kind, ts)
                .target(TargetDescriptor::new(tag).with_data("href", "/a/b"))
                .scroll_y(scroll_y)
                .touch_points(touch_points);
            if let Some((x, y)) = coords {
                builder = builder.coordinates(x, y);
            }
            if kind == BehaviorKind::Visibility {
                builder = builder.detail(RecordDetail::Visibility { hidden });
            }
            builder.build()
        })
}

fn arb_env() -> impl Strategy<Value = EnvironmentSnapshot> {
    (
        0u64..2_000_000,
        0u32..24,
        1u32..28,
        any::<bool>(),
        prop::option::of((0u64..u64::MAX / 2, 0u64..u64::MAX / 2)),
        prop::option::of(0u32..256),
        prop::option::of(-5.0f64..10.0),
    )
        .prop_map(|(now_ms, hour, day, hidden, heap, cores, ratio)| {
            let local = NaiveDate::from_ymd_opt(2024, 2, day)
                .and_then(|d| d.and_hms_opt(hour, 0, 0))
                .unwrap();
            let mut env = EnvironmentSnapshot::at(now_ms, local);
            env.page_hidden = hidden;
            env.heap = heap.map(|(used_bytes, limit_bytes)| HeapUsage {
                used_bytes,
                limit_bytes,
            });
            env.device = DeviceInfo {
                hardware_concurrency: cores,
                pixel_ratio: ratio,
                device_memory_gb: None,
            };
            env.network = NetworkInfo::default();
            env
        })
}

proptest! {
    #[test]
    fn every_slot_is_in_unit_range(
        mut window in prop::collection::vec(arb_record(), 0..40),
        env in arb_env(),
    ) {
        window.sort_by_key(|r| r.timestamp_ms());
        let mut extractor = FeatureExtractor::new(FeatureConfig::default());
        let vector = extractor.extract(&window, &env);
        for value in vector.as_slice() {
            prop_assert!((0.0..=1.0).contains(value), "slot out of range: {}", value);
        }
    }

    #[test]
    fn unsorted_windows_are_still_bounded(
        window in prop::collection::vec(arb_record(), 0..40),
        env in arb_env(),
    ) {
        let mut extractor = FeatureExtractor::new(FeatureConfig::default());
        let vector = extractor.extract(&window, &env);
        prop_assert!(vector.as_slice().iter().all(|v| (0.0..=1.0).contains(v)));
    }
}
