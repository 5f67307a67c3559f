//! Diagnostic tracing to stderr. User-facing output goes through `ui::messages`.

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "RWORKDAY_LOG";

pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "rworkday=debug" } else { "warn" })
    });

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
