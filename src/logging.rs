//! Logging setup for the binary.

use tracing_subscriber::{filter::EnvFilter, fmt};

/// Install a stderr subscriber. `RUST_LOG` takes precedence over `default_level`.
///
/// Logs go to stderr so stdout carries only weight data.
pub fn init(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
