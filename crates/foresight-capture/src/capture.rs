//! Event capture: validation, normalization, buffering and the prediction trigger.

use foresight_core::config::CaptureConfig;
use foresight_core::errors::CaptureError;
use foresight_core::models::{RecordDetail, TargetDescriptor};
use foresight_core::{BehaviorKind, BehaviorRecord};
use tracing::debug;

use crate::debounce::DebounceGate;
use crate::event_map::kind_for_event;
use crate::raw_event::RawEvent;
use crate::ring_buffer::RingBuffer;

/// Counters kept by [`EventCapture`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaptureStats {
    /// Records accepted into the buffer.
    pub observed: u64,
    /// Raw events rejected as malformed.
    pub dropped: u64,
    /// Records pushed out of the full buffer.
    pub evicted: u64,
}

/// Result of observing one accepted event.
#[derive(Debug, Clone, PartialEq)]
pub struct ObserveOutcome {
    pub record: BehaviorRecord,
    /// Whether a prediction cycle should run now.
    pub trigger: bool,
}

/// Owns the behavior buffer. Single writer; readers get copies.
#[derive(Debug)]
pub struct EventCapture {
    buffer: RingBuffer<BehaviorRecord>,
    gate: DebounceGate,
    low_water_mark: usize,
    stats: CaptureStats,
}

impl EventCapture {
    pub fn new(config: &CaptureConfig) -> Self {
        Self {
            buffer: RingBuffer::with_capacity(config.buffer_capacity.max(1)),
            gate: DebounceGate::new(config.debounce_ms),
            low_water_mark: config.low_water_mark,
            stats: CaptureStats::default(),
        }
    }

    /// Validate and append one raw event. Malformed events are dropped and
    /// yield `None`; nothing is ever surfaced to the caller.
    pub fn observe(&mut self, raw: RawEvent) -> Option<BehaviorRecord> {
        self.observe_with_trigger(raw).map(|outcome| outcome.record)
    }

    /// Like [`observe`](Self::observe), also reporting whether the buffer is
    /// past the low-water mark and the debounce interval has elapsed.
    pub fn observe_with_trigger(&mut self, raw: RawEvent) -> Option<ObserveOutcome> {
        let record = match normalize(&raw) {
            Ok(record) => record,
            Err(err) => {
                self.stats.dropped += 1;
                debug!(event_type = %raw.event_type, error = %err, "dropping raw event");
                return None;
            }
        };

        if self.buffer.push(record.clone()).is_some() {
            self.stats.evicted += 1;
        }
        self.stats.observed += 1;

        let trigger =
            self.buffer.len() >= self.low_water_mark && self.gate.should_fire(record.timestamp_ms());
        Some(ObserveOutcome { record, trigger })
    }

    /// The trailing `n` records, oldest first.
    pub fn window(&self, n: usize) -> Vec<BehaviorRecord> {
        self.buffer.last_n(n).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn stats(&self) -> CaptureStats {
        self.stats
    }
}

fn normalize(raw: &RawEvent) -> Result<BehaviorRecord, CaptureError> {
    let kind = kind_for_event(&raw.event_type)?;

    let target = match &raw.target {
        Some(target) if !target.attached => return Err(CaptureError::DetachedTarget),
        Some(target) if target.tag.trim().is_empty() => {
            return Err(CaptureError::MalformedEvent {
                reason: "target has no tag name".to_string(),
            })
        }
        Some(target) => target.to_descriptor(),
        // Window-level events carry no element.
        None if kind.is_system() || kind == BehaviorKind::Scroll => TargetDescriptor::document(),
        None => {
            return Err(CaptureError::MalformedEvent {
                reason: format!("{kind} event without a target"),
            })
        }
    };

    // Missing coordinates are accepted: keyboard-activated clicks carry none.
    if kind.is_pointer() {
        if let Some(point) = raw.coordinates {
            if !point.is_finite() {
                return Err(CaptureError::MalformedEvent {
                    reason: "non-finite pointer coordinates".to_string(),
                });
            }
        }
    }

    let detail = match kind {
        BehaviorKind::Visibility => Some(RecordDetail::Visibility {
            hidden: raw.hidden.ok_or_else(|| CaptureError::MalformedEvent {
                reason: "visibility event without document state".to_string(),
            })?,
        }),
        BehaviorKind::Network => Some(RecordDetail::Network {
            online: raw
                .online
                .unwrap_or_else(|| raw.event_type.eq_ignore_ascii_case("online")),
        }),
        _ => None,
    };

    let mut builder = BehaviorRecord::builder(kind, raw.timestamp_ms)
        .target(target)
        .maybe_coordinates(raw.coordinates)
        .viewport(raw.viewport)
        .device(raw.device);
    if let Some(detail) = detail {
        builder = builder.detail(detail);
    }
    Ok(builder.build())
}
