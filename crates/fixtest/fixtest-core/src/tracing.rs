//! Tracing setup for harness binaries and test suites.

use tracing_subscriber::EnvFilter;

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

/// Install a fmt subscriber filtered by `FIXTEST_LOG`.
///
/// Safe to call more than once; only the first call installs a subscriber.
/// Output goes through the test writer so `cargo test` captures it.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_test_writer()
        .try_init();
}
