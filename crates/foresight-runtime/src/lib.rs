//! # foresight-runtime
//!
//! The explicit context object that wires capture, extraction,
//! classification, scheduling and prefetching together.
//!
//! [`ForesightRuntime::start`] spawns three tasks:
//! - the cycle task, sole consumer of the bounded ingestion channel and sole
//!   writer of new registry entries
//! - the sweeper, expiring actions past their lifetime
//! - the metrics reporter
//!
//! Hosts feed it through a cloneable [`RuntimeHandle`].

pub mod background;
pub mod cycle;
pub mod ingest;
pub mod runtime;

pub use ingest::{Ingest, RuntimeHandle};
pub use runtime::ForesightRuntime;
