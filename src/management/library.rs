use std::path::{Path, PathBuf};

use chrono::{Datelike, Local};
use serde_json::Value;

use crate::{
    error::{Change, LibraryError, StorageError},
    management::{ProgressTracker, storage},
    types::{Achievement, Book, NewBook, StoredBook},
    utils,
};

/// Outcome of [`LibraryStore::update_progress`].
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressUpdate {
    pub book: Book,
    /// True only for the update that first took the book to 100%.
    pub completed: bool,
}

/// The ordered book collection, written through to `library.json` after every
/// mutation.
pub struct LibraryStore {
    path: PathBuf,
    books: Vec<Book>,
}

impl LibraryStore {
    pub fn new(path: impl Into<PathBuf>, books: Option<Vec<Book>>) -> Self {
        Self {
            path: path.into(),
            books: books.unwrap_or_default(),
        }
    }

    /// Loads the collection. A missing or malformed file yields an empty
    /// library; single malformed records are skipped.
    pub async fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let books = match Self::read_books(&path).await {
            Ok(books) => books,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot load library, starting empty");
                Vec::new()
            }
        };
        Self { path, books }
    }

    async fn read_books(path: &Path) -> Result<Vec<Book>, StorageError> {
        let records = match storage::read_json::<Value>(path).await? {
            Value::Array(records) => records,
            other => {
                return Err(StorageError::InvalidShape {
                    path: path.to_path_buf(),
                    reason: format!("expected an array of books, found {}", json_kind(&other)),
                });
            }
        };

        let now = Local::now().naive_local();
        let mut books = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            match serde_json::from_value::<StoredBook>(record) {
                Ok(stored) => books.push(stored.migrate(now)),
                Err(e) => {
                    tracing::warn!(path = %path.display(), index, error = %e, "skipping malformed book record")
                }
            }
        }
        Ok(books)
    }

    fn insert(&mut self, new: NewBook) -> Result<Book, LibraryError> {
        let now = Local::now().naive_local();
        new.validate(now.year())?;

        let book = new.into_book(self.next_id()?, now);
        self.books.push(book.clone());
        Ok(book)
    }

    /// Validates and appends a new book, then persists the collection.
    pub async fn add(&mut self, new: NewBook) -> Result<Change<Book>, LibraryError> {
        let book = self.insert(new)?;
        let written = self.persist().await;
        Ok(Change::new(book).with_write(written))
    }

    pub async fn remove(&mut self, id: u32) -> Result<Change<Book>, LibraryError> {
        let index = self.position(id)?;
        let book = self.books.remove(index);
        let written = self.persist().await;
        Ok(Change::new(book).with_write(written))
    }

    /// Sets the progress of a book, clamped to `0..=100`.
    ///
    /// The first time a book reaches 100 it is marked read and `tracker`
    /// receives exactly one completion. The collection is persisted for every
    /// found book, even when the value did not change.
    pub async fn update_progress(
        &mut self,
        id: u32,
        progress: i64,
        tracker: &mut ProgressTracker,
    ) -> Result<Change<ProgressUpdate>, LibraryError> {
        let index = self.position(id)?;
        let progress = utils::clamp_progress(progress);

        let book = &mut self.books[index];
        book.progress = progress;
        let completed = progress == 100 && !book.read;
        if completed {
            book.read = true;
        }
        let update = ProgressUpdate {
            book: book.clone(),
            completed,
        };

        let mut change = Change::new(update);
        if completed {
            tracing::debug!(id, "book completed");
            change.warnings.extend(tracker.on_book_completed().await.warnings);
        }
        Ok(change.with_write(self.persist().await))
    }

    /// Records in insertion order.
    pub fn list_all(&self) -> &[Book] {
        &self.books
    }

    pub fn get(&self, id: u32) -> Option<Book> {
        self.books.iter().find(|b| b.id == id).cloned()
    }

    pub fn count(&self) -> usize {
        self.books.len()
    }

    pub fn achievements_earned(&self) -> Vec<Achievement> {
        utils::earned_achievements(self.books.len())
    }

    pub fn next_achievement_target(&self) -> Option<usize> {
        utils::next_achievement_target(self.books.len())
    }

    pub async fn persist(&self) -> Result<(), StorageError> {
        match storage::write_json(&self.path, &self.books).await {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), books = self.books.len(), "library saved");
                Ok(())
            }
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "failed to save library");
                Err(e)
            }
        }
    }

    // max + 1 never hands out an id still in use, even after removals
    fn next_id(&self) -> Result<u32, LibraryError> {
        self.books
            .iter()
            .map(|b| b.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or(LibraryError::IdsExhausted)
    }

    fn position(&self, id: u32) -> Result<usize, LibraryError> {
        self.books
            .iter()
            .position(|b| b.id == id)
            .ok_or(LibraryError::NotFound { id })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
