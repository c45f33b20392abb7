use std::path::PathBuf;

use tabled::Table;

use crate::{
    cli::report_warnings,
    error, info,
    management::LibraryManager,
    success,
    types::{BookTableRow, NewBook},
    utils, warning,
};

/// Adds a book, optionally reading a cover image from disk.
///
/// The image bytes are stored base64-encoded and never looked at again. An
/// unreadable image only drops the cover, the book is still added.
pub async fn add_book(manager: &mut LibraryManager, mut book: NewBook, cover: Option<PathBuf>) {
    if let Some(cover) = cover {
        match async_fs::read(&cover).await {
            Ok(bytes) => book.cover_image = Some(utils::encode_cover(&bytes)),
            Err(e) => warning!(
                "Cannot read cover image {}, adding without cover. Err: {}",
                cover.display(),
                e
            ),
        }
    }

    match manager.add(book).await {
        Ok(change) => {
            report_warnings(&change.warnings);
            success!(
                "'{}' joined your quest with id {}!",
                change.value.title,
                change.value.id
            );
        }
        Err(e) => error!("Cannot add book. Err: {}", e),
    }
}

pub fn list_books(manager: &LibraryManager, unread: bool) {
    let rows: Vec<BookTableRow> = manager
        .list_all()
        .iter()
        .filter(|b| !unread || !b.read)
        .map(BookTableRow::from)
        .collect();

    if rows.is_empty() {
        info!("Your quest begins with adding books!");
        return;
    }

    println!("{}", Table::new(rows));
}

pub async fn remove_book(manager: &mut LibraryManager, id: u32) {
    match manager.remove(id).await {
        Ok(change) => {
            report_warnings(&change.warnings);
            success!("'{}' has been removed from your library!", change.value.title);
        }
        Err(e) => error!("Cannot remove book. Err: {}", e),
    }
}
