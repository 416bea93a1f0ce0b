//! Tracing setup for the `bookshelf` binary.
//!
//! The menu owns stdout, so events are written to stderr. `RUST_LOG` wins when
//! set; otherwise the level comes from `--log-level` or the `[logging]`
//! section of the config file.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const FALLBACK_LEVEL: &str = "warn";

/// Install the global subscriber
///
/// An unparseable `default_level` falls back to `warn` and is reported once
/// the subscriber is live.
pub fn init(default_level: &str) {
    let (filter, rejected) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, None),
        Err(_) => match EnvFilter::try_new(default_level) {
            Ok(filter) => (filter, None),
            Err(e) => (EnvFilter::new(FALLBACK_LEVEL), Some(e)),
        },
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();

    if let Some(e) = rejected {
        tracing::warn!(
            "Ignoring log level {:?} ({}), using {}",
            default_level,
            e,
            FALLBACK_LEVEL
        );
    }
}

/// Route events to the test harness at debug level
#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}
