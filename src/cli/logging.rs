//! Diagnostic logging to stderr.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "ROSETTA_LOG";

/// Install the global subscriber.
///
/// `ROSETTA_LOG` wins when set; otherwise `-v` enables debug output and the
/// default only shows warnings.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init();
}
