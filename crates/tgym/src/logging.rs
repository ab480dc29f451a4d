//! Diagnostic logging to stderr.
//!
//! The filter comes from `TGYM_LOG` using `tracing-subscriber` directive
//! syntax (`info`, `tgym_core=debug`, ...). Without it only warnings are
//! shown, so the animation is not interleaved with log lines.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "TGYM_LOG";

const DEFAULT_FILTER: &str = "warn";

fn filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter())
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
