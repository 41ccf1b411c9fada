use std::collections::BTreeMap;

use foresight_core::models::{DeviceContext, Point, TargetDescriptor, Viewport};
use serde::{Deserialize, Serialize};

/// Element an event was dispatched on, as reported by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTarget {
    pub tag: String,
    pub id: String,
    pub class_name: String,
    pub data: BTreeMap<String, String>,
    /// False once the element has been removed from the document.
    pub attached: bool,
}

impl Default for RawTarget {
    fn default() -> Self {
        Self {
            tag: String::new(),
            id: String::new(),
            class_name: String::new(),
            data: BTreeMap::new(),
            attached: true,
        }
    }
}

impl RawTarget {
    pub fn element(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
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

    pub fn detached(mut self) -> Self {
        self.attached = false;
        self
    }

    pub(crate) fn to_descriptor(&self) -> TargetDescriptor {
        let mut descriptor = TargetDescriptor::new(self.tag.as_str())
            .with_id(self.id.as_str())
            .with_class(self.class_name.as_str());
        for (key, value) in &self.data {
            descriptor = descriptor.with_data(key.as_str(), value.as_str());
        }
        descriptor
    }
}

/// An unvalidated event as delivered by the host (DOM listener, test driver).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEvent {
    /// DOM event name, e.g. `"click"`, `"pointermove"`, `"visibilitychange"`.
    pub event_type: String,
    /// Monotonic timestamp in milliseconds.
    pub timestamp_ms: u64,
    /// `None` for events dispatched on the window or document.
    #[serde(default)]
    pub target: Option<RawTarget>,
    #[serde(default)]
    pub coordinates: Option<Point>,
    #[serde(default)]
    pub viewport: Viewport,
    #[serde(default)]
    pub device: DeviceContext,
    /// Document visibility for `visibilitychange`.
    #[serde(default)]
    pub hidden: Option<bool>,
    /// Connectivity for `online` / `offline`; derived from the event name when absent.
    #[serde(default)]
    pub online: Option<bool>,
}

impl RawEvent {
    pub fn new(event_type: impl Into<String>, timestamp_ms: u64) -> Self {
        Self {
            event_type: event_type.into(),
            timestamp_ms,
            target: None,
            coordinates: None,
            viewport: Viewport::default(),
            device: DeviceContext::default(),
            hidden: None,
            online: None,
        }
    }

    pub fn on(mut self, target: RawTarget) -> Self {
        self.target = Some(target);
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.coordinates = Some(Point { x, y });
        self
    }

    pub fn scrolled_to(mut self, scroll_y: f64) -> Self {
        self.viewport.scroll_y = scroll_y;
        self
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_hidden(mut self, hidden: bool) -> Self {
        self.hidden = Some(hidden);
        self
    }

    pub fn with_touch_points(mut self, touch_points: u32) -> Self {
        self.device.touch_points = touch_points;
        self
    }
}
