//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "enrollment_service=info,enrollment_server=info,tower_http=info";

/// Install a fmt subscriber filtered by `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
/// Calling it twice is harmless; the second install is ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
