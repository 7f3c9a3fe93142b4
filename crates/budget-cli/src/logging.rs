//! Diagnostic logging setup.
//!
//! Logs go to stderr so they never mix with command output. `BUDGET_LOG`
//! takes an env-filter directive and overrides the `-v` count.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "BUDGET_LOG";

/// Level implied by the number of `-v` flags.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
