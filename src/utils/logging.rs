//! Tracing setup for the CLI.
//!
//! Logs go to stderr so they never interleave with table output on
//! stdout. Setting `ACCOUNT_CLI_LOG_FILE` redirects them to a timestamped
//! session file under the platform data directory instead.

use std::fs::File;
use std::sync::Mutex;

use anyhow::Result;
use chrono::Local;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::utils::app_paths::AppPaths;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Initialize tracing. Honors `RUST_LOG`; defaults to `warn`.
pub fn init_tracing() {
    if std::env::var_os("ACCOUNT_CLI_LOG_FILE").is_some() {
        if let Ok(path) = session_log_file() {
            eprintln!("Logs will be written to: {}", path.display());
            if init_file_tracing(&path).is_ok() {
                return;
            }
        }
        eprintln!("Could not open session log file, logging to stderr");
    }

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .init();
}

fn init_file_tracing(path: &std::path::Path) -> Result<()> {
    let file = File::create(path)?;

    let fmt_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .init();

    Ok(())
}

fn session_log_file() -> Result<std::path::PathBuf> {
    let name = format!("session-{}.log", Local::now().format("%Y%m%d-%H%M%S"));
    Ok(AppPaths::log_dir()?.join(name))
}
