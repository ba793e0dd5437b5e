use tracing_subscriber::EnvFilter;

use crate::config::TourConfig;

/// Install the stderr diagnostics subscriber.
///
/// `RUST_LOG` wins over `config.log_level`. Returns `false` when a global
/// subscriber was already installed, which is harmless.
pub fn init(config: &TourConfig) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
