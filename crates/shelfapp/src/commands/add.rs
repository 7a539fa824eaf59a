use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::{Book, BookEntry};
use crate::store::CatalogStore;
use tracing::info;

use super::helpers::generate_id;

pub fn run<S: CatalogStore>(
    store: &S,
    title: &str,
    author: &str,
    year: &str,
) -> Result<CmdResult> {
    let book = Book::new(title, author, year);
    if book.title.is_empty() {
        return Err(ShelfError::Validation("Title cannot be empty".into()));
    }
    if book.author.is_empty() {
        return Err(ShelfError::Validation("Author cannot be empty".into()));
    }

    let mut catalog = store.load()?;
    let id = generate_id(&catalog)?;
    catalog.insert(id, book.clone());
    store.save(&catalog)?;
    info!(%id, title = %book.title, "book added");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Book added with ID {}: {}",
        id, book.title
    )));
    result.affected_books.push(BookEntry::new(id, book));
    Ok(result)
}
