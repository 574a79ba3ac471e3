//! Tracing subscriber setup for hosts and tests

use tracing_subscriber::{fmt, EnvFilter};

/// Filter used when neither RUST_LOG nor the configuration sets one
pub const DEFAULT_FILTER: &str = "dbinspect=info";

/// Install a fmt subscriber. The filter comes from RUST_LOG, else
/// `configured`, else `DEFAULT_FILTER`.
///
/// Returns false if a global subscriber was already installed.
pub fn init_logging(configured: Option<&str>) -> bool {
    fmt()
        .with_env_filter(filter(configured))
        .with_target(false)
        .try_init()
        .is_ok()
}

fn filter(configured: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(configured.unwrap_or(DEFAULT_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}
