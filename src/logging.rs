use std::path::{Path, PathBuf};

use anyhow::Context;
use sysinfo::System;

use crate::error::AppResult;

const LOG_TARGET_STARTUP: &str = "toa_time::startup";

/// Default log directory, next to the plugin config
pub fn default_log_dir() -> PathBuf {
    crate::config::Config::app_dir()
        .map(|dir| dir.join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Initialize tracing with file rotation
///
/// - Daily rotation, files named `toa-time.log.YYYY-MM-DD`
/// - Filter from `RUST_LOG`, `info` by default
/// - Debug builds also log to the console
///
/// Fails if a global subscriber is already installed (the host may own one).
pub fn initialize_tracing(log_dir: &Path) -> AppResult<()> {
    use tracing_appender::rolling;
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;

    let file_appender = rolling::daily(log_dir, "toa-time.log");

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    #[cfg(debug_assertions)]
    {
        let console_layer = fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(true)
            .with_target(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .with(console_layer)
            .try_init()
            .context("installing tracing subscriber")?;
    }

    #[cfg(not(debug_assertions))]
    {
        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .try_init()
            .context("installing tracing subscriber")?;
    }

    tracing::info!("Log directory: {}", log_dir.display());
    Ok(())
}

pub fn log_runtime_environment() {
    let version = env!("CARGO_PKG_VERSION");
    let os_name = System::long_os_version()
        .or_else(System::name)
        .unwrap_or_else(|| "Unknown OS".to_string());
    let kernel = System::kernel_version().unwrap_or_else(|| "Unknown Kernel".to_string());

    tracing::info!(
        target: LOG_TARGET_STARTUP,
        "Starting Toa Time v{} on ({})",
        version,
        std::env::consts::ARCH
    );
    tracing::info!(target: LOG_TARGET_STARTUP, "Operating System: {} (kernel {})", os_name, kernel);
}
