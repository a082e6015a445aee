//! Console logging setup using `tracing-subscriber`.
//!
//! Events go to stderr so they never mix with game output on stdout.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "warn";

/// Initialise stderr logging for the CLI.
///
/// Controlled by `RUST_LOG`, falling back to `default_filter`. The TUI passes
/// `"off"` so log lines cannot tear the full-screen display.
pub fn init_cli(default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A second call (as in tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
