//! Tracing subscriber setup for the `ccrm` binary

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding per-target filter directives (e.g. `campus_records=debug`)
const LOG_ENV: &str = "CCRM_LOG";

/// Parse a config level string into a filter
pub fn parse_level(val: &str) -> Option<LevelFilter> {
    match val.trim().to_ascii_lowercase().as_str() {
        "error" => Some(LevelFilter::ERROR),
        "warn" => Some(LevelFilter::WARN),
        "info" => Some(LevelFilter::INFO),
        "debug" => Some(LevelFilter::DEBUG),
        _ => None,
    }
}

/// Install the global subscriber.
///
/// `CCRM_LOG` wins over `level` when set and valid. Events go to `log_file`
/// (appended, no ANSI colours) when given, otherwise to stderr.
///
/// # Errors
/// Returns a message if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init(level: LevelFilter, log_file: Option<&Path>) -> Result<(), String> {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::default().add_directive(level.into()));

    let Some(path) = log_file else {
        return tracing_subscriber::registry()
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .with(filter)
            .try_init()
            .map_err(|e| e.to_string());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| format!("cannot create {}: {e}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("cannot open {}: {e}", path.display()))?;

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()
        .map_err(|e| e.to_string())
}
