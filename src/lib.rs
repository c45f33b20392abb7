//! Library Quest reading tracker
//!
//! Keeps a personal library of books together with the reader's progress:
//! per-book reading progress, a daily reading streak, a monthly goal and
//! achievement badges. Both the library and the progress state are plain JSON
//! files rewritten after every change.
//!
//! # Modules
//!
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `error` - Validation and storage error types
//! - `logging` - File-backed `tracing` subscriber
//! - `management` - The library store, the progress tracker and the session owning both
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use libquest::{config::StoragePaths, management::LibraryManager, types::{Genre, NewBook}};
//!
//! #[tokio::main]
//! async fn main() -> libquest::Res<()> {
//!     let mut manager = LibraryManager::load(&StoragePaths::from_env()).await;
//!     let change = manager.add(NewBook::new("Dune", "Herbert", 1965, Genre::SciFi)).await?;
//!     manager.update_progress(change.value.id, 100).await?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod management;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the command-line glue, where any error ends up printed to the
/// user. The core operations return their own typed errors.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Found {} books", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("'{}' joined your quest!", title);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for failures the command cannot recover from. Code after this macro
/// does not run.
///
/// # Example
///
/// ```
/// error!("No book with id {}", id);
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues, for example a change that could not be
/// written to disk.
///
/// # Example
///
/// ```
/// warning!("Change may not survive a restart: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
