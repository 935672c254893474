//! Tracing subscriber setup for binaries embedding the poller.
//!
//! Filtering is controlled by `VIGIL_LOG` (falling back to `info`), and
//! `VIGIL_LOG_FORMAT=json` switches to JSON output for log shipping.

use tracing_subscriber::{EnvFilter, fmt};

/// Default logging target when `VIGIL_LOG` is not provided.
const DEFAULT_LOG_LEVEL: &str = "info";

/// Install the global tracing subscriber.
///
/// Safe to call more than once; later calls are no-ops because a global
/// subscriber is already installed.
pub fn init_logging() {
    let env_filter = EnvFilter::try_from_env("VIGIL_LOG")
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let builder = fmt()
        .with_env_filter(env_filter)
        .with_target(false);

    let json = std::env::var("VIGIL_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if result.is_err() {
        tracing::debug!(event = "core.logging.already_initialized");
    }
}
