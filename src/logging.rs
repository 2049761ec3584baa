//! Tracing set-up for the `pathname` binary.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "PATHNAME_LOG";

/// Install a stderr fmt subscriber.
///
/// `PATHNAME_LOG` wins when set; otherwise the level is `warn`, or `debug`
/// when `verbose`. Calling this twice is harmless (the second call is a no-op).
pub fn init(verbose: bool) {
    let fallback = if verbose { "pathname=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
