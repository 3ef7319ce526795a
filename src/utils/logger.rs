//! Logging setup for binaries that embed this library.
//!
//! The library itself only emits `tracing` events; wiring a subscriber is
//! the embedding process's job, and this helper covers the common case.

use anyhow::Result;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the global tracing subscriber.
///
/// # Arguments
/// * `log_level` - filter directive (trace, debug, info, warn, error); falls
///   back to the `RUST_LOG` environment variable when `None`
/// * `log_file` - additional log file; stdout-only when `None`
///
/// # Examples
/// ```no_run
/// use flowutil::utils::logger::init_logger;
///
/// // Level from RUST_LOG, stdout only
/// init_logger(None, None).unwrap();
///
/// // Explicit level
/// init_logger(Some("debug"), None).unwrap();
///
/// // Also append to a file
/// use std::path::PathBuf;
/// init_logger(Some("info"), Some(PathBuf::from("reaper.log"))).unwrap();
/// ```
pub fn init_logger(log_level: Option<&str>, log_file: Option<PathBuf>) -> Result<()> {
    let env_filter = if let Some(level) = log_level {
        EnvFilter::try_new(level)?
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            // Default: info everywhere, debug for this crate
            EnvFilter::new("info,flowutil=debug")
        })
    };

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_level(true)
        .with_ansi(true)
        .compact();

    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer);

    if let Some(log_path) = log_file {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        // No ANSI colors in the file copy
        let file_layer = fmt::layer()
            .with_writer(std::sync::Arc::new(file))
            .with_target(true)
            .with_ansi(false)
            .with_level(true);

        registry.with(file_layer).init();
    } else {
        registry.init();
    }

    tracing::debug!("Logger initialized");
    Ok(())
}
