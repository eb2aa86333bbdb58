// src/utils/logging.rs
use tracing_subscriber::{fmt, EnvFilter};

/// Level used when `RUST_LOG` is unset. `RUST_LOG=debug` adds the counts of
/// dropped rows and skipped tickers.
const DEFAULT_LOG_LEVEL: &str = "info";

/// Installs a plain-text subscriber that writes progress lines to stdout.
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    let installed = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .try_init();

    if installed.is_err() {
        tracing::warn!("A global subscriber was already installed; keeping it.");
    }
}
