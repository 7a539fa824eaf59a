use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::BookEntry;
use crate::store::CatalogStore;
use tracing::info;

use super::helpers::parse_id;

/// Removes a record. The removed entry is returned in `affected_books` and its
/// description in the success message.
///
/// `raw_id` is checked only once the catalog is known to be non-empty, so an
/// empty catalog is reported as such whatever the id looks like.
///
/// If the save fails the removal is not confirmed and the persisted catalog
/// still holds the record.
pub fn run<S: CatalogStore>(store: &S, raw_id: &str) -> Result<CmdResult> {
    let mut catalog = store.require_nonempty()?;
    let id = parse_id(raw_id)?;
    let book = catalog
        .remove(&id)
        .ok_or_else(|| ShelfError::NotFound(id.to_string()))?;
    store.save(&catalog)?;
    info!(%id, title = %book.title, "book deleted");

    let entry = BookEntry::new(id, book);
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Book deleted: {}", entry)));
    result.affected_books.push(entry);
    Ok(result)
}
