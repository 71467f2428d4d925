//! Shared components for CLI commands
//!
//! Common plumbing used across the command implementations: logging setup,
//! configuration resolution, and progress bar construction.

use crate::config::Config;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use tracing::debug;

/// Set up structured logging at the level derived from verbosity flags
///
/// A `RUST_LOG`-style environment filter takes precedence when present.
pub fn setup_logging(log_level: &str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warmte_processor={}", log_level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .init();

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Resolve the runtime configuration from defaults plus CLI overrides
pub fn resolve_config(store: Option<PathBuf>, jobs: Option<usize>) -> Result<Config> {
    let mut config = Config::default();

    if let Some(store_path) = store {
        config = config.with_store_path(store_path);
    }
    if let Some(workers) = jobs {
        config = config.with_max_concurrent_imports(workers);
    }

    config.validate()?;
    Ok(config)
}

/// Create a progress bar for tracking per-file import progress
pub fn create_progress_bar(total: u64, message: &str) -> Result<ProgressBar> {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::default_bar()
        .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        .map_err(|e| Error::configuration(format!("Invalid progress bar template: {}", e)))?
        .progress_chars("#>-");
    pb.set_style(style);
    pb.set_message(message.to_string());
    Ok(pb)
}
