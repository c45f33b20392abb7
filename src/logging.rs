//! File-backed log sink.
//!
//! The library only emits `tracing` events. The binary calls
//! [`init_logging`] once at start-up so warnings about unreadable files and
//! errors about failed writes end up in `library_quest.log`.

use std::{fs::OpenOptions, path::Path, sync::Mutex};

use tracing_subscriber::EnvFilter;

/// Installs a global subscriber appending plain-text events to `path`.
///
/// An unparsable `filter` falls back to `info`.
pub fn init_logging(path: &Path, filter: &str) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| e.to_string())?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("cannot open log file {}: {}", path.display(), e))?;

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| e.to_string())
}
