//! stderr logging via tracing-subscriber

use tracing_subscriber::EnvFilter;

/// Filter from `RUST_LOG` when set, otherwise `level` (e.g. "warn").
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // A second init (tests, embedding) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
