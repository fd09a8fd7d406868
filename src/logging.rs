//! Tracing subscriber setup

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive, e.g. `staffbook=debug`
pub const LOG_ENV: &str = "STAFFBOOK_LOG";

static LOG_INIT: OnceLock<()> = OnceLock::new();

/// Install the stderr subscriber once. `verbose` wins over `STAFFBOOK_LOG`.
pub fn init_logging(verbose: bool) {
    LOG_INIT.get_or_init(|| {
        let filter = if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
    });
}
