use crate::error::{Result, ShelfError};
use crate::model::{BookId, Catalog};

/// Reads a user-supplied id. Text that is not a positive integer cannot name
/// any record, so it is reported as [`ShelfError::NotFound`].
pub fn parse_id(raw: &str) -> Result<BookId> {
    let trimmed = raw.trim();
    trimmed
        .parse()
        .map_err(|_| ShelfError::NotFound(trimmed.to_string()))
}

/// Next id for a new record: one past the highest id currently in the catalog,
/// or 1 when it is empty.
///
/// Only what remains is considered, so removing the highest record frees its id
/// for reuse. Gaps left lower down are never filled.
pub fn generate_id(catalog: &Catalog) -> Result<BookId> {
    match catalog.keys().next_back() {
        None => Ok(BookId::FIRST),
        Some(max) => max
            .next()
            .ok_or_else(|| ShelfError::Store(format!("No id available after {}", max))),
    }
}
