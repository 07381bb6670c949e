//! Tracing setup: human-readable output on stdout plus a plain-text copy appended to the log file.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Filter used when `RUST_LOG` is unset or unparsable. teloxide's polling internals stay at warn.
pub const DEFAULT_LOG_FILTER: &str = "info,teloxide=warn";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Installs the global subscriber. Creates the log file's parent directory if needed.
/// Load `.env` (dotenvy) before calling this, otherwise `RUST_LOG` from the file is not seen.
/// Fails if a global subscriber is already installed.
pub fn init_tracing(log_file: impl AsRef<Path>) -> anyhow::Result<()> {
    let log_file = log_file.as_ref();
    if let Some(dir) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("Failed to open log file {}", log_file.display()))?;

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(true);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .with_target(true);

    Registry::default()
        .with(env_filter())
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}
