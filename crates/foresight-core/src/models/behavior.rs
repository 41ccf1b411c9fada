//! Normalized interaction records produced by event capture.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The ten interaction kinds the pipeline understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BehaviorKind {
    Click,
    Move,
    Scroll,
    Key,
    Focus,
    Blur,
    Touch,
    Resize,
    Visibility,
    Network,
}

impl BehaviorKind {
    pub const ALL: [BehaviorKind; 10] = [
        Self::Click,
        Self::Move,
        Self::Scroll,
        Self::Key,
        Self::Focus,
        Self::Blur,
        Self::Touch,
        Self::Resize,
        Self::Visibility,
        Self::Network,
    ];

    /// Pointer-style kinds whose coordinates must be finite when present.
    pub fn is_pointer(self) -> bool {
        matches!(self, Self::Click | Self::Move | Self::Touch)
    }

    /// Kinds emitted by the host environment rather than by a DOM target.
    pub fn is_system(self) -> bool {
        matches!(self, Self::Visibility | Self::Network | Self::Resize)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::Move => "move",
            Self::Scroll => "scroll",
            Self::Key => "key",
            Self::Focus => "focus",
            Self::Blur => "blur",
            Self::Touch => "touch",
            Self::Resize => "resize",
            Self::Visibility => "visibility",
            Self::Network => "network",
        }
    }
}

impl std::fmt::Display for BehaviorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of the element an interaction targeted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetDescriptor {
    /// Upper-case tag name (`A`, `BUTTON`, ...). System records use `DOCUMENT`.
    pub tag: String,
    pub id: String,
    pub class_name: String,
    /// `data-*` attributes with the `data-` prefix stripped.
    pub data: BTreeMap<String, String>,
}

impl TargetDescriptor {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_uppercase(),
            ..Default::default()
        }
    }

    /// Descriptor used for window/document-level records.
    pub fn document() -> Self {
        Self::new("DOCUMENT")
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_class(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    /// Key identifying the element for dwell-time pairing.
    pub fn element_key(&self) -> String {
        format!("{}:{}:{}", self.tag, self.id, self.class_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((other.x - self.x).powi(2) + (other.y - self.y).powi(2)).sqrt()
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DeviceContext {
    pub pixel_ratio: f64,
    pub touch_points: u32,
}

impl Default for DeviceContext {
    fn default() -> Self {
        Self {
            pixel_ratio: 1.0,
            touch_points: 0,
        }
    }
}

/// Payload carried by system-sourced records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecordDetail {
    Visibility { hidden: bool },
    Network { online: bool },
}

/// One normalized interaction. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BehaviorRecord {
    kind: BehaviorKind,
    timestamp_ms: u64,
    target: TargetDescriptor,
    coordinates: Option<Point>,
    viewport: Viewport,
    device: DeviceContext,
    detail: Option<RecordDetail>,
}

impl BehaviorRecord {
    pub fn builder(kind: BehaviorKind, timestamp_ms: u64) -> BehaviorRecordBuilder {
        BehaviorRecordBuilder::new(kind, timestamp_ms)
    }

    pub fn kind(&self) -> BehaviorKind {
        self.kind
    }

    /// Monotonic timestamp in milliseconds.
    pub fn timestamp_ms(&self) -> u64 {
        self.timestamp_ms
    }

    pub fn target(&self) -> &TargetDescriptor {
        &self.target
    }

    pub fn coordinates(&self) -> Option<Point> {
        self.coordinates
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn device(&self) -> &DeviceContext {
        &self.device
    }

    pub fn detail(&self) -> Option<RecordDetail> {
        self.detail
    }

    /// `Some(hidden)` for visibility records.
    pub fn hidden(&self) -> Option<bool> {
        match self.detail {
            Some(RecordDetail::Visibility { hidden }) => Some(hidden),
            _ => None,
        }
    }
}

/// Builder for [`BehaviorRecord`]. The record is frozen by [`BehaviorRecordBuilder::build`].
#[derive(Debug, Clone)]
pub struct BehaviorRecordBuilder {
    record: BehaviorRecord,
}

impl BehaviorRecordBuilder {
    pub fn new(kind: BehaviorKind, timestamp_ms: u64) -> Self {
        Self {
            record: BehaviorRecord {
                kind,
                timestamp_ms,
                target: TargetDescriptor::document(),
                coordinates: None,
                viewport: Viewport::default(),
                device: DeviceContext::default(),
                detail: None,
            },
        }
    }

    pub fn target(mut self, target: TargetDescriptor) -> Self {
        self.record.target = target;
        self
    }

    pub fn coordinates(mut self, x: f64, y: f64) -> Self {
        self.record.coordinates = Some(Point { x, y });
        self
    }

    pub fn maybe_coordinates(mut self, point: Option<Point>) -> Self {
        self.record.coordinates = point;
        self
    }

    pub fn viewport(mut self, viewport: Viewport) -> Self {
        self.record.viewport = viewport;
        self
    }

    pub fn scroll_y(mut self, scroll_y: f64) -> Self {
        self.record.viewport.scroll_y = scroll_y;
        self
    }

    pub fn device(mut self, device: DeviceContext) -> Self {
        self.record.device = device;
        self
    }

    pub fn touch_points(mut self, touch_points: u32) -> Self {
        self.record.device.touch_points = touch_points;
        self
    }

    pub fn detail(mut self, detail: RecordDetail) -> Self {
        self.record.detail = Some(detail);
        self
    }

    pub fn build(self) -> BehaviorRecord {
        self.record
    }
}
