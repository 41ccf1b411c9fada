//! # foresight-capture
//!
//! Turns raw host events into immutable [`BehaviorRecord`]s, keeps the most
//! recent ones in a bounded ring buffer and decides when a prediction cycle
//! should run.
//!
//! [`BehaviorRecord`]: foresight_core::BehaviorRecord

pub mod capture;
pub mod debounce;
pub mod event_map;
pub mod raw_event;
pub mod ring_buffer;

pub use capture::{CaptureStats, EventCapture, ObserveOutcome};
pub use debounce::DebounceGate;
pub use raw_event::{RawEvent, RawTarget};
pub use ring_buffer::RingBuffer;
