//! Log output setup

use tracing_subscriber::EnvFilter;

/// Install the global fmt subscriber.
///
/// `RUST_LOG` takes precedence over `default_filter`. An invalid
/// `default_filter` falls back to `info`. Returns `false` when a global
/// subscriber was already installed, which is left in place.
pub fn init(default_filter: &str) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let shown = filter.to_string();
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(filter = %shown, "logging initialised");
    }
    installed
}
