//! Logging Infrastructure
//!
//! `tracing` subscriber setup for binaries and examples using the client.

use tracing_subscriber::EnvFilter;

/// Initialize the logger (`RUST_LOG`, default `info`)
pub fn init_logger() {
    init_logger_with_level(None, false);
}

/// Initialize the logger with an explicit default level and output format
///
/// `RUST_LOG` still wins over `log_level` when set. Calling this twice is a
/// no-op for the second call.
pub fn init_logger_with_level(log_level: Option<&str>, json: bool) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    if result.is_err() {
        tracing::debug!("Logger already initialized");
    }
}
