//! Logging setup for the wings binary.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive, e.g. `wings=trace`.
pub const LOG_ENV: &str = "WINGS_LOG";

/// Install a stderr subscriber. `WINGS_LOG` wins over `--verbose`.
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    // A subscriber may already be installed when embedded in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
