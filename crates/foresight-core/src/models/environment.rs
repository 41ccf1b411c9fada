//! Ambient environment readings passed explicitly into feature extraction.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Effective connection type as reported by the network information API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectiveConnectionType {
    #[serde(rename = "slow-2g")]
    Slow2g,
    #[serde(rename = "2g")]
    TwoG,
    #[serde(rename = "3g")]
    ThreeG,
    #[serde(rename = "4g")]
    FourG,
    #[serde(rename = "unknown")]
    Unknown,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkInfo {
    /// `None` when the platform exposes no connection information at all.
    pub effective_type: Option<EffectiveConnectionType>,
    pub online: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub hardware_concurrency: Option<u32>,
    pub pixel_ratio: Option<f64>,
    pub device_memory_gb: Option<f64>,
}

/// JS heap usage, when the platform reports it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeapUsage {
    pub used_bytes: u64,
    pub limit_bytes: u64,
}

/// Snapshot of everything outside the record window that features read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentSnapshot {
    /// Monotonic time, same clock as record timestamps.
    pub now_ms: u64,
    /// Local wall-clock time, for time-of-day and seasonality.
    pub local_time: NaiveDateTime,
    pub page_hidden: bool,
    pub network: NetworkInfo,
    pub device: DeviceInfo,
    pub heap: Option<HeapUsage>,
}

impl EnvironmentSnapshot {
    /// Snapshot with unknown device/network/heap info.
    pub fn at(now_ms: u64, local_time: NaiveDateTime) -> Self {
        Self {
            now_ms,
            local_time,
            page_hidden: false,
            network: NetworkInfo {
                effective_type: None,
                online: true,
            },
            device: DeviceInfo::default(),
            heap: None,
        }
    }
}
