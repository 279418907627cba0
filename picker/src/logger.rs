//! Logging initialization

use lib_core::Config;
use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name inside `PICKER_LOG_DIR`.
const LOG_FILE: &str = "picker.log";

/// Initialize the logging system
///
/// Sets up:
/// - An `EnvFilter` from `RUST_LOG`, falling back to the configured level
/// - Human-readable output on stderr (stdout is reserved for results)
/// - A daily-rotated log file when a log directory is configured
/// - A panic hook that logs panics
///
/// Keep the returned guard alive until exit so buffered file writes are flushed.
pub fn init(config: &Config) -> Option<WorkerGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new(lib_core::config::DEFAULT_LOG_LEVEL));

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);

    let (file_layer, guard) = match &config.log_dir {
        Some(dir) => match fs::create_dir_all(dir) {
            Ok(()) => {
                let appender = tracing_appender::rolling::daily(dir, LOG_FILE);
                let (non_blocking, guard) = tracing_appender::non_blocking(appender);
                let layer = fmt::layer()
                    .with_writer(non_blocking)
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .with_ansi(false); // No ANSI codes in log files
                (Some(layer), Some(guard))
            }
            Err(e) => {
                eprintln!("Warning: Failed to create log directory: {}", e);
                (None, None)
            }
        },
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    tracing::debug!(
        log_level = %config.log_level,
        log_dir = ?config.log_dir,
        "Logging initialized"
    );

    setup_panic_hook();

    guard
}

/// Log panics before handing over to the default hook
fn setup_panic_hook() {
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
            .unwrap_or_else(|| "unknown location".to_string());

        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic message".to_string()
        };

        tracing::error!(location = %location, message = %message, "Application panic");

        default_panic(panic_info);
    }));
}
