//! Diagnostic logging
//!
//! Diagnostics go to stderr through `tracing`; stdout stays reserved for sink output.
//! The filter comes from `RELEASE_GATE_LOG` (EnvFilter syntax), default `warn`.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "RELEASE_GATE_LOG";

/// Install the global subscriber; `verbose` forces `debug` for this crate
pub fn init(verbose: bool) {
  let filter = if verbose {
    EnvFilter::new("release_gate=debug")
  } else {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
  };

  // A second init (e.g. from tests) keeps the first subscriber
  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .try_init();
}
