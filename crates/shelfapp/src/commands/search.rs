//! Exact, case-insensitive lookup on a single field.
//!
//! `"tales"` matches a title of `"Tales"` but not `"Tales of Belkin"`; this is
//! equality, not substring search. Matches come back in catalog order.
//!
//! Both sides go through full Unicode case folding, so `"STRASSE"` matches
//! `"Straße"`.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::{entries, SearchField};
use crate::store::CatalogStore;
use caseless::default_case_fold_str;
use tracing::debug;

pub fn run<S: CatalogStore>(store: &S, query: &str, field: SearchField) -> Result<CmdResult> {
    let catalog = store.require_nonempty()?;
    let wanted = default_case_fold_str(query);

    let matches: Vec<_> = entries(&catalog)
        .into_iter()
        .filter(|entry| default_case_fold_str(field.value_of(&entry.book)) == wanted)
        .collect();
    debug!(%field, query, hits = matches.len(), "search finished");

    if matches.is_empty() {
        return Err(ShelfError::NoResults);
    }

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("Books found: {}", matches.len())));
    Ok(result.with_listed_books(matches))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BookId;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn sample() -> InMemoryStore {
        StoreFixture::new()
            .with_book(1, "Тестовая книга", "Тест", "2020")
            .with_book(2, "Стихи", "Пушкин", "1825")
            .with_checked_out_book(3, "Поэма", "Есенин", "1920")
            .with_checked_out_book(4, "Тестовая книга", "Тест", "2020")
            .build()
    }

    #[test]
    fn matches_every_record_with_equal_field() {
        let result = run(&sample(), "Тест", SearchField::Author).unwrap();
        let ids: Vec<u64> = result.listed_books.iter().map(|e| e.id.get()).collect();
        assert_eq!(ids, vec![1, 4]);
        assert_eq!(result.messages[0].content, "Books found: 2");
    }

    #[test]
    fn comparison_ignores_case_including_cyrillic() {
        let result = run(&sample(), "ПУШКИН", SearchField::Author).unwrap();
        assert_eq!(result.listed_books[0].id, BookId::new(2).unwrap());
    }

    #[test]
    fn comparison_uses_full_case_folding() {
        let store = StoreFixture::new()
            .with_book(1, "Die Straße", "Böll", "1953")
            .build();
        let result = run(&store, "DIE STRASSE", SearchField::Title).unwrap();
        assert_eq!(result.listed_books[0].book.author, "Böll");
    }

    #[test]
    fn substring_does_not_match() {
        let err = run(&sample(), "Тестовая", SearchField::Title).unwrap_err();
        assert!(matches!(err, ShelfError::NoResults));
    }

    #[test]
    fn searches_year_as_text() {
        let result = run(&sample(), "1920", SearchField::Year).unwrap();
        assert_eq!(result.listed_books.len(), 1);
        assert_eq!(result.listed_books[0].book.title, "Поэма");
    }

    #[test]
    fn empty_catalog_is_reported() {
        let err = run(&InMemoryStore::new(), "x", SearchField::Title).unwrap_err();
        assert!(matches!(err, ShelfError::EmptyCatalog));
    }

    #[test]
    fn search_does_not_write() {
        let store = sample();
        run(&store, "Стихи", SearchField::Title).unwrap();
        assert_eq!(store.save_count(), 0);
    }
}
