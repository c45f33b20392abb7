//! Error types for the reading tracker.
//!
//! Three families of failure exist and they are handled very differently:
//!
//! - [`ValidationError`] and [`LibraryError`] are returned to the caller of an
//!   operation when its input is rejected. Nothing is mutated and nothing is
//!   written.
//! - [`StorageError`] describes a failed read or write of a backing file. Read
//!   failures are absorbed at load time (the store starts from defaults). Write
//!   failures are handed back inside a [`Change`] next to the successful
//!   in-memory result.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Rejected input for a new book.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,

    #[error("author must not be empty")]
    EmptyAuthor,

    #[error("year {year} is outside of 1000..={max}")]
    YearOutOfRange { year: i32, max: i32 },

    #[error("rating {0} is outside of 0.0..=5.0")]
    RatingOutOfRange(f32),
}

/// Failure of a library or progress operation that the caller must handle.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LibraryError {
    #[error("invalid book: {0}")]
    Validation(#[from] ValidationError),

    #[error("no book with id {id}")]
    NotFound { id: u32 },

    #[error("no book id left to assign")]
    IdsExhausted,
}

/// Failure to read or write one of the backing JSON files.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed JSON in {path}: {source}")]
    Serde {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unexpected content in {path}: {reason}")]
    InvalidShape { path: PathBuf, reason: String },
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StorageError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn serde(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        StorageError::Serde {
            path: path.into(),
            source,
        }
    }
}

/// The result of a mutation that succeeded in memory.
///
/// `warnings` holds every write that failed while persisting the change. The
/// in-memory effect stands regardless; an empty list means everything reached
/// disk.
#[derive(Debug)]
pub struct Change<T> {
    pub value: T,
    pub warnings: Vec<StorageError>,
}

impl<T> Change<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    pub fn with_write(mut self, written: Result<(), StorageError>) -> Self {
        if let Err(e) = written {
            self.warnings.push(e);
        }
        self
    }

    pub fn is_persisted(&self) -> bool {
        self.warnings.is_empty()
    }
}
