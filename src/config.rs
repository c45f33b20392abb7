//! Configuration management for the reading tracker.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{
    env,
    path::{Path, PathBuf},
};

pub const APP_DIR: &str = "library-quest";
pub const LIBRARY_FILE: &str = "library.json";
pub const USER_DATA_FILE: &str = "user_data.json";
pub const LOG_FILE: &str = "library_quest.log";

pub const DATA_DIR_VAR: &str = "LIBRARY_QUEST_DATA_DIR";
pub const LOG_FILTER_VAR: &str = "LIBRARY_QUEST_LOG";
const DEFAULT_LOG_FILTER: &str = "info";

/// Loads environment variables from `.env` in the local data directory.
///
/// The file lives in:
/// - Linux: `~/.local/share/library-quest/.env`
/// - macOS: `~/Library/Application Support/library-quest/.env`
/// - Windows: `%LOCALAPPDATA%/library-quest/.env`
///
/// A missing file or directory is fine; the defaults apply. Variables already
/// set in the process environment win over the file.
///
/// # Errors
///
/// Returns an error if the `.env` file exists but cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let path = default_data_dir().join(".env");
    if async_fs::metadata(&path).await.is_ok_and(|m| m.is_file()) {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Directory holding the library, the user state and the log file.
///
/// `LIBRARY_QUEST_DATA_DIR` overrides the platform default.
pub fn data_dir() -> PathBuf {
    match env::var(DATA_DIR_VAR) {
        Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
        _ => default_data_dir(),
    }
}

fn default_data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push(APP_DIR);
    path
}

pub fn log_file() -> PathBuf {
    data_dir().join(LOG_FILE)
}

/// `tracing` filter directive, e.g. `debug` or `libquest=trace`.
pub fn log_filter() -> String {
    env::var(LOG_FILTER_VAR).unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
}

/// Locations of the two independent backing files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    pub library: PathBuf,
    pub user_data: PathBuf,
}

impl StoragePaths {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            library: dir.join(LIBRARY_FILE),
            user_data: dir.join(USER_DATA_FILE),
        }
    }

    pub fn from_env() -> Self {
        Self::in_dir(data_dir())
    }
}
