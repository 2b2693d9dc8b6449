// Rust guideline compliant 2026-10-16

//! Logging bootstrap for the `kb` binary.

use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::fmt;

/// Parses a configured log level name.
///
/// # Errors
///
/// Returns an error message if the name is not a tracing level.
pub fn parse_log_level(level: &str) -> Result<Level, String> {
    Level::from_str(level).map_err(|_| format!("invalid log level: {}", level))
}

/// Installs a stderr `fmt` subscriber at `level`.
///
/// Unknown level names fall back to `warn`. Calling this more than once
/// keeps the first subscriber.
pub fn init_logging(level: &str) {
    let level = parse_log_level(level).unwrap_or(Level::WARN);
    let subscriber = fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);
}
