use chrono::NaiveDate;
use foresight_core::config::{ExplorationMode, FeatureConfig};
use foresight_core::models::{
    DeviceInfo, EffectiveConnectionType, EnvironmentSnapshot, FeatureSlot, HeapUsage, NetworkInfo,
    TargetDescriptor,
};
use foresight_core::{BehaviorKind, BehaviorRecord};
use foresight_features::{ExplorationSource, FeatureExtractor};

fn deterministic() -> FeatureExtractor {
    FeatureExtractor::new(FeatureConfig {
        exploration: ExplorationMode::Disabled,
        ..FeatureConfig::default()
    })
}

fn env(now_ms: u64) -> EnvironmentSnapshot {
    // Saturday 03:00: no seasonality bonus.
    let local = NaiveDate::from_ymd_opt(2024, 3, 9)
        .and_then(|d| d.and_hms_opt(3, 0, 0))
        .unwrap();
    EnvironmentSnapshot::at(now_ms, local)
}

fn scrolls(spacing_ms: u64) -> Vec<BehaviorRecord> {
    (0..10)
        .map(|i| {
            BehaviorRecord::builder(BehaviorKind::Scroll, i * spacing_ms)
                .scroll_y(i as f64 * 100.0)
                .build()
        })
        .collect()
}

// ── Scroll velocity ──

#[test]
fn steady_scroll_at_one_second_spacing_is_a_tenth() {
    let mut extractor = deterministic();
    let vector = extractor.extract(&scrolls(1_000), &env(10_000));
    // 100 px/s over a 1000 px/s divisor
    assert!((vector.get(FeatureSlot::ScrollVelocity) - 0.1).abs() < 1e-9);
}

#[test]
fn overflowing_pointer_distance_saturates() {
    let mut extractor = deterministic();
    let moves: Vec<BehaviorRecord> = [(0.0, 0.0), (1e308, 1e308), (0.0, 0.0)]
        .iter()
        .enumerate()
        .map(|(i, (x, y))| {
            BehaviorRecord::builder(BehaviorKind::Move, i as u64 * 100)
                .coordinates(*x, *y)
                .build()
        })
        .collect();
    let vector = extractor.extract(&moves, &env(1_000));
    assert_eq!(vector.get(FeatureSlot::PointerMovement), 1.0);
}

#[test]
fn fast_scroll_clamps_to_one() {
    let mut extractor = deterministic();
    let vector = extractor.extract(&scrolls(100), &env(1_000));
    // 1000 px/s
    assert!((vector.get(FeatureSlot::ScrollVelocity) - 1.0).abs() < 1e-9);
}

// ── Window handling ──

#[test]
fn only_trailing_window_is_read() {
    let mut extractor = deterministic();
    let mut window: Vec<BehaviorRecord> = (0..40)
        .map(|i| {
            BehaviorRecord::builder(BehaviorKind::Click, i * 10)
                .target(TargetDescriptor::new("button"))
                .build()
        })
        .collect();
    let all_clicks = extractor.extract(&window, &env(400));

    // Prepending older records beyond the window changes nothing.
    window.splice(
        0..0,
        (0..5).map(|i| BehaviorRecord::builder(BehaviorKind::Key, i).build()),
    );
    let with_noise = extractor.extract(&window, &env(400));
    assert_eq!(all_clicks, with_noise);
}

#[test]
fn empty_window_is_valid() {
    let mut extractor = deterministic();
    let vector = extractor.extract(&[], &env(0));
    assert_eq!(vector.get(FeatureSlot::ScrollVelocity), 0.0);
    assert_eq!(vector.get(FeatureSlot::DeviceUsage), 0.5);
    assert_eq!(vector.get(FeatureSlot::PerformanceContext), 0.5);
    assert_eq!(vector.get(FeatureSlot::NetworkCondition), 0.7);
    assert_eq!(vector.get(FeatureSlot::Seasonality), 0.5);
}

#[test]
fn click_burst_saturates_click_frequency() {
    let mut extractor = deterministic();
    let window: Vec<BehaviorRecord> = (0..10)
        .map(|i| {
            BehaviorRecord::builder(BehaviorKind::Click, 1_000 + i * 100)
                .target(TargetDescriptor::new("a"))
                .build()
        })
        .collect();
    let vector = extractor.extract(&window, &env(2_000));
    // 10 clicks in 5 s = 2 clicks/s, over a divisor of 5
    assert!((vector.get(FeatureSlot::ClickFrequency) - 0.4).abs() < 1e-9);
    assert!((vector.get(FeatureSlot::Engagement) - 1.0).abs() < 1e-9);
}

// ── Environment ──

#[test]
fn environment_slots_follow_snapshot() {
    let mut extractor = deterministic();
    let mut snapshot = env(0);
    snapshot.network = NetworkInfo {
        effective_type: Some(EffectiveConnectionType::ThreeG),
        online: true,
    };
    snapshot.heap = Some(HeapUsage {
        used_bytes: 20,
        limit_bytes: 100,
    });
    snapshot.device = DeviceInfo {
        hardware_concurrency: Some(8),
        pixel_ratio: Some(3.0),
        device_memory_gb: Some(8.0),
    };
    let vector = extractor.extract(&[], &snapshot);
    assert!((vector.get(FeatureSlot::NetworkCondition) - 0.5).abs() < 1e-9);
    assert!((vector.get(FeatureSlot::PerformanceContext) - 0.8).abs() < 1e-9);
    assert!((vector.get(FeatureSlot::DeviceCapability) - 1.0).abs() < 1e-9);
    assert!((vector.get(FeatureSlot::TimeOfDay) - 3.0 / 24.0).abs() < 1e-9);
}

// ── Exploration ──

#[test]
fn disabled_exploration_is_deterministic() {
    let mut extractor = deterministic();
    let window = scrolls(500);
    let first = extractor.extract(&window, &env(5_000));
    let second = extractor.extract(&window, &env(5_000));
    assert_eq!(first, second);
    assert_eq!(first.get(FeatureSlot::Exploration), 0.0);
}

#[test]
fn seeded_exploration_is_reproducible() {
    let window = scrolls(500);
    let mut a = FeatureExtractor::with_exploration(FeatureConfig::default(), ExplorationSource::seeded(9));
    let mut b = FeatureExtractor::with_exploration(FeatureConfig::default(), ExplorationSource::seeded(9));
    assert_eq!(a.extract(&window, &env(5_000)), b.extract(&window, &env(5_000)));
}
