//! Tests for the Foresight configuration system.

use std::sync::Mutex;

use foresight_core::config::{ClassifierKind, ExplorationMode, ForesightConfig};
use foresight_core::errors::ConfigError;

/// Serializes tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn clear_foresight_env_vars() {
    for key in [
        "FORESIGHT_CAPTURE_BUFFER_CAPACITY",
        "FORESIGHT_CAPTURE_DEBOUNCE_MS",
        "FORESIGHT_CLASSIFIER_KIND",
        "FORESIGHT_SCHEDULER_CONFIDENCE_THRESHOLD",
        "FORESIGHT_OBSERVABILITY_LOG_LEVEL",
    ] {
        std::env::remove_var(key);
    }
}

// ── Defaults ──

#[test]
fn defaults_match_documented_values() {
    let config = ForesightConfig::default();
    assert_eq!(config.capture.buffer_capacity, 200);
    assert_eq!(config.capture.low_water_mark, 20);
    assert_eq!(config.capture.debounce_ms, 100);
    assert_eq!(config.features.window_size, 20);
    assert_eq!(config.features.sub_window_size, 10);
    assert_eq!(config.classifier.kind, ClassifierKind::RuleBased);
    assert!((config.scheduler.confidence_threshold - 0.6).abs() < f64::EPSILON);
    assert!((config.scheduler.eager_threshold - 0.8).abs() < f64::EPSILON);
    assert!((config.scheduler.external_hint_threshold - 0.7).abs() < f64::EPSILON);
    assert_eq!(config.prefetch.prefetch_lifetime_ms, 60_000);
    assert_eq!(config.prefetch.prerender_lifetime_ms, 30_000);
    assert_eq!(config.observability.metrics_interval_secs, 30);
    assert!(config.validate().is_ok());
}

#[test]
fn static_resources_cover_every_fixed_category() {
    let resources = ForesightConfig::default().scheduler.resources;
    assert_eq!(resources.search[0].url, "/js/search.js");
    assert_eq!(resources.contact.len(), 2);
    assert_eq!(resources.social[1].url, "/api/social/counts");
    assert_eq!(resources.exit[0].url, "/js/exit-intent.js");
    assert_eq!(resources.form_async[0].url, "/js/async-form.js");
}

// ── TOML ──

#[test]
fn partial_toml_keeps_other_defaults() {
    let config = ForesightConfig::from_toml(
        r#"
[capture]
debounce_ms = 250

[classifier]
kind = "dense_network"
weights_path = "/tmp/weights.json"

[features.exploration]
mode = "disabled"
"#,
    )
    .unwrap();

    assert_eq!(config.capture.debounce_ms, 250);
    assert_eq!(config.capture.buffer_capacity, 200);
    assert_eq!(config.classifier.kind, ClassifierKind::DenseNetwork);
    assert_eq!(config.features.exploration, ExplorationMode::Disabled);
    assert_eq!(config.scheduler.navigation_top_n, 3);
}

#[test]
fn seeded_exploration_parses() {
    let config = ForesightConfig::from_toml(
        r#"
[features.exploration]
mode = "seeded"
seed = 42
"#,
    )
    .unwrap();
    assert_eq!(config.features.exploration, ExplorationMode::Seeded { seed: 42 });
}

#[test]
fn invalid_toml_is_parse_error() {
    let err = ForesightConfig::from_toml("[capture\nbuffer_capacity = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn toml_roundtrip_preserves_values() {
    let mut config = ForesightConfig::default();
    config.scheduler.media_top_n = 7;
    let text = config.to_toml().unwrap();
    let parsed = ForesightConfig::from_toml(&text).unwrap();
    assert_eq!(parsed.scheduler.media_top_n, 7);
}

// ── Validation ──

#[test]
fn threshold_out_of_range_is_rejected() {
    let mut config = ForesightConfig::default();
    config.scheduler.confidence_threshold = 1.5;
    match config.validate() {
        Err(ConfigError::ValidationFailed { field, .. }) => {
            assert_eq!(field, "scheduler.confidence_threshold")
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn eager_must_exceed_moderate() {
    let mut config = ForesightConfig::default();
    config.scheduler.eager_threshold = 0.5;
    assert!(config.validate().is_err());
}

#[test]
fn window_larger_than_buffer_is_rejected() {
    let mut config = ForesightConfig::default();
    config.features.window_size = 500;
    match config.validate() {
        Err(ConfigError::ValidationFailed { field, .. }) => assert_eq!(field, "features.window_size"),
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn zero_lifetime_is_rejected() {
    let mut config = ForesightConfig::default();
    config.prefetch.preload_lifetime_ms = 0;
    assert!(config.validate().is_err());
}

#[test]
fn zero_divisor_is_rejected() {
    let mut config = ForesightConfig::default();
    config.features.divisors.scroll_velocity = 0.0;
    assert!(config.validate().is_err());
}

// ── Layered loading ──

#[test]
fn load_missing_file_falls_back_to_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_foresight_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let config = ForesightConfig::load(&dir.path().join("foresight.toml")).unwrap();
    assert_eq!(config.capture.buffer_capacity, 200);
}

#[test]
fn env_overrides_file_values() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_foresight_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("foresight.toml");
    std::fs::write(
        &path,
        r#"
[capture]
debounce_ms = 300

[scheduler]
confidence_threshold = 0.65
"#,
    )
    .unwrap();

    std::env::set_var("FORESIGHT_CAPTURE_DEBOUNCE_MS", "50");
    std::env::set_var("FORESIGHT_CLASSIFIER_KIND", "uniform");
    std::env::set_var("FORESIGHT_OBSERVABILITY_LOG_LEVEL", "debug");

    let config = ForesightConfig::load(&path).unwrap();
    assert_eq!(config.capture.debounce_ms, 50);
    assert!((config.scheduler.confidence_threshold - 0.65).abs() < f64::EPSILON);
    assert_eq!(config.classifier.kind, ClassifierKind::Uniform);
    assert_eq!(config.observability.log_level, "debug");

    clear_foresight_env_vars();
}

#[test]
fn unparseable_env_value_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_foresight_env_vars();

    std::env::set_var("FORESIGHT_CAPTURE_BUFFER_CAPACITY", "lots");
    let mut config = ForesightConfig::default();
    config.apply_env_overrides();
    assert_eq!(config.capture.buffer_capacity, 200);

    clear_foresight_env_vars();
}

#[test]
fn invalid_file_value_fails_load() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_foresight_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("foresight.toml");
    std::fs::write(&path, "[capture]\nbuffer_capacity = 0\n").unwrap();
    assert!(matches!(
        ForesightConfig::load(&path),
        Err(ConfigError::ValidationFailed { .. })
    ));
}
