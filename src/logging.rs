//! Logging initialization.

use tracing_subscriber::EnvFilter;

/// Initialize the global tracing subscriber.
///
/// The filter comes from the resolved config (`MINITRACKR_LOG`); `RUST_LOG`
/// is honored when set, since `EnvFilter::try_from_default_env` wins over
/// the configured default.
///
/// # Errors
///
/// Returns an error if a subscriber is already installed.
pub fn init_logging(default_filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {e}"))?;

    Ok(())
}
