//! # foresight-prefetch
//!
//! Executes speculative actions against the host platform.
//!
//! - [`Prefetcher`]: `Queued → InFlight → {Completed | Failed}` under a
//!   per-kind lifetime, `Expired` when the lifetime runs out
//! - [`PrefetchCache`]: in-process moka cache of warmed components and
//!   already-fetched resources
//! - [`MonotonicClock`]: the millisecond clock actions are stamped with

pub mod cache;
pub mod clock;
pub mod engine;
pub mod outcome;

pub use cache::{CachedResource, PrefetchCache};
pub use clock::MonotonicClock;
pub use engine::{Prefetcher, SweepReport};
pub use outcome::PrefetchOutcome;
