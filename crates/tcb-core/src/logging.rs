//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const APP_DIR: &str = "test-command-builder";
const LOG_FILE: &str = "tcb.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/test-command-builder/logs/` (or the
/// platform equivalent). The terminal is never written to, since the TUI
/// owns it. Log level is controlled by the `TCB_LOG` environment variable.
///
/// # Examples
/// ```bash
/// TCB_LOG=debug cargo run
/// TCB_LOG=tcb_app=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE);

    // Default to info for our crates, warn for everything else
    let env_filter = EnvFilter::try_from_env("TCB_LOG").unwrap_or_else(|_| {
        EnvFilter::new("tcb=info,tcb_core=info,tcb_app=info,tcb_tui=info,warn")
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Test Command Builder starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> PathBuf {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    base.join(APP_DIR).join("logs")
}

/// Get the path of the current log file
pub fn get_current_log_file() -> PathBuf {
    get_log_directory().join(LOG_FILE)
}
