//! Structured logging for StreamHub.
//!
//! `tracing` events are written to stderr through `tracing-subscriber`.
//! `RUST_LOG` overrides the filter configured in settings.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Installs the global subscriber. `default_filter` is used when `RUST_LOG`
/// is unset or unparsable.
///
/// Calling this twice is harmless; the second call is ignored.
pub fn init(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_line_number(true)
                .compact(),
        )
        .try_init();
}

/// Test-friendly subscriber that writes through the test harness capture.
pub fn init_test() {
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new("streamhub=debug"))
        .with(fmt::layer().with_test_writer())
        .try_init();
}
