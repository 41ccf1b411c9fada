//! Fixed-length normalized feature vector.

use serde::{Deserialize, Serialize};

use crate::constants::FEATURE_COUNT;

/// Named slots of a [`FeatureVector`], in wire order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeatureSlot {
    ScrollVelocity = 0,
    ClickFrequency = 1,
    PointerMovement = 2,
    DwellTime = 3,
    InteractionDiversity = 4,
    Engagement = 5,
    NavigationPattern = 6,
    AttentionSpan = 7,
    DeviceUsage = 8,
    TimeOfDay = 9,
    PerformanceContext = 10,
    NetworkCondition = 11,
    DeviceCapability = 12,
    Exploration = 13,
    Seasonality = 14,
}

impl FeatureSlot {
    pub const ALL: [FeatureSlot; FEATURE_COUNT] = [
        Self::ScrollVelocity,
        Self::ClickFrequency,
        Self::PointerMovement,
        Self::DwellTime,
        Self::InteractionDiversity,
        Self::Engagement,
        Self::NavigationPattern,
        Self::AttentionSpan,
        Self::DeviceUsage,
        Self::TimeOfDay,
        Self::PerformanceContext,
        Self::NetworkCondition,
        Self::DeviceCapability,
        Self::Exploration,
        Self::Seasonality,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Ordered sequence of [`FEATURE_COUNT`] floats, each in `[0, 1]`.
///
/// Only constructible through clamping, so the range invariant always holds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Build a vector, clamping every value into `[0, 1]`. Non-finite values become 0.
    pub fn from_raw(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values.map(clamp_unit))
    }

    /// All-zero vector.
    pub fn zeros() -> Self {
        Self([0.0; FEATURE_COUNT])
    }

    pub fn get(&self, slot: FeatureSlot) -> f64 {
        self.0[slot.index()]
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn to_array(self) -> [f64; FEATURE_COUNT] {
        self.0
    }

    pub fn len(&self) -> usize {
        FEATURE_COUNT
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for FeatureVector {
    fn default() -> Self {
        Self::zeros()
    }
}

/// Clamp into `[0, 1]`. Positive infinity saturates to 1; NaN maps to 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}
