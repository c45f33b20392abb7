//! # CLI Module
//!
//! The command-line face of Library Quest. Every command is a thin adapter:
//! it turns parsed arguments into one call on [`crate::management::LibraryManager`]
//! and prints the outcome.
//!
//! ## Commands
//!
//! - [`add_book`] - Adds a book, optionally with a cover image
//! - [`list_books`] - Shows the library as a table, in insertion order
//! - [`remove_book`] - Removes a book by id
//! - [`update_progress`] - Sets reading progress; 100% finishes the book
//! - [`streak`] - Shows the current reading streak
//! - [`goal`] - Shows or sets the monthly reading goal
//! - [`achievements`] - Lists earned badges and the way to the next one
//! - [`recommend`] - Suggests a title for a genre
//!
//! ## Error Handling
//!
//! Rejected input (an empty title, an unknown id) ends the command with an
//! error. A change that could not be written to disk is still reported as done,
//! followed by a warning that it may not survive a restart.

mod achievements;
mod books;
mod progress;

pub use achievements::achievements;
pub use achievements::recommend;
pub use books::add_book;
pub use books::list_books;
pub use books::remove_book;
pub use progress::goal;
pub use progress::streak;
pub use progress::update_progress;

use crate::{error::StorageError, warning};

fn report_warnings(warnings: &[StorageError]) {
    for e in warnings {
        warning!("Change may not survive a restart. Err: {}", e);
    }
}
