//! Signals derived from network, device and memory readings.

use foresight_core::models::{DeviceInfo, EffectiveConnectionType, HeapUsage, NetworkInfo};

const DEFAULT_CORES: f64 = 4.0;
const DEFAULT_PIXEL_RATIO: f64 = 1.0;
const DEFAULT_MEMORY_GB: f64 = 4.0;

/// Free-heap score in `[0, 100]`; 50 when unknown.
pub fn performance_context(heap: Option<HeapUsage>) -> f64 {
    match heap {
        Some(heap) if heap.limit_bytes > 0 => {
            let used = heap.used_bytes as f64 / heap.limit_bytes as f64;
            (1.0 - used) * 100.0
        }
        _ => 50.0,
    }
}

/// Connection quality in `[0, 1]`.
pub fn network_condition(network: &NetworkInfo) -> f64 {
    match network.effective_type {
        Some(EffectiveConnectionType::Slow2g) => 0.1,
        Some(EffectiveConnectionType::TwoG) => 0.25,
        Some(EffectiveConnectionType::ThreeG) => 0.5,
        Some(EffectiveConnectionType::FourG) => 1.0,
        Some(EffectiveConnectionType::Unknown) => 0.5,
        // No connection API: assume a good connection.
        None => 0.7,
    }
}

/// Mean of core count, pixel ratio and memory, each scaled and capped at 1.
pub fn device_capability(device: &DeviceInfo) -> f64 {
    let cores = device
        .hardware_concurrency
        .filter(|c| *c > 0)
        .map(f64::from)
        .unwrap_or(DEFAULT_CORES);
    let pixel_ratio = device
        .pixel_ratio
        .filter(|r| r.is_finite() && *r > 0.0)
        .unwrap_or(DEFAULT_PIXEL_RATIO);
    let memory = device
        .device_memory_gb
        .filter(|m| m.is_finite() && *m > 0.0)
        .unwrap_or(DEFAULT_MEMORY_GB);

    let core_score = (cores / 8.0).min(1.0);
    let pixel_score = (pixel_ratio / 3.0).min(1.0);
    let memory_score = (memory / 8.0).min(1.0);
    (core_score + pixel_score + memory_score) / 3.0
}
