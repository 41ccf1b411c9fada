//! Tracing setup: structured logging with span definitions per pipeline stage.

pub mod spans;

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Environment variable read for the log filter.
pub const LOG_ENV: &str = "FORESIGHT_LOG";

/// Initialize the tracing subscriber with structured JSON output.
///
/// Respects the `FORESIGHT_LOG` environment variable for filtering.
/// Defaults to `info` level if not set. Idempotent.
pub fn init_tracing() {
    init_tracing_with_default("info", true);
}

/// Like [`init_tracing`], with a fallback filter and output format taken
/// from configuration.
pub fn init_tracing_with_default(default_filter: &str, json: bool) {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));
        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true);
        // Another subscriber may already be installed by the host.
        let _ = if json {
            builder.json().try_init()
        } else {
            builder.try_init()
        };
    });
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::new(filter))
            .with_target(true)
            .json()
            .try_init();
    });
}
