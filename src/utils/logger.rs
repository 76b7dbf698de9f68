use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

static LOGGER: OnceCell<()> = OnceCell::new();

/// Initializes the global tracing subscriber once
///
/// The filter is taken from `RUST_LOG`, defaulting to `info`. Repeated
/// calls are no-ops, so tests and examples can call this freely.
pub fn setup_logger() {
    LOGGER.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .try_init();
    });
}
