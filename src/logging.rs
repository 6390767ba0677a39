//! Logging setup for the `public-url` binary.

use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "warn,public_url=info";

/// Initialize structured logging to stderr.
///
/// The filter comes from `RUST_LOG`, defaulting to `warn,public_url=info`.
/// Set `RUST_LOG=public_url=debug` to see why each URL was rejected.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
