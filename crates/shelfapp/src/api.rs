//! # API Facade
//!
//! The single entry point for catalog operations, whatever the UI.
//!
//! The facade takes the raw strings a user typed (ids, field names, statuses),
//! turns them into typed values, and dispatches to the command modules. It does
//! no business logic of its own and no terminal I/O.
//!
//! ## Input Normalization
//!
//! - **Ids**: passed through raw. The commands parse them only after the
//!   empty-catalog check; text that is not a positive integer cannot name any
//!   record and is reported as [`ShelfError::NotFound`].
//! - **Search field**: one of `title`, `author`, `year`; anything else is
//!   [`ShelfError::InvalidField`], raised before the catalog is touched.
//! - **Status**: case-insensitive, see [`Status`]'s `FromStr`; anything else is
//!   [`ShelfError::InvalidStatus`], also raised before the catalog is touched.
//!
//! ## Generic Over CatalogStore
//!
//! - Production: `ShelfApi<FileStore>`
//! - Testing: `ShelfApi<InMemoryStore>`

use crate::commands::{self, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::{SearchField, Status};
use crate::store::CatalogStore;

pub struct ShelfApi<S: CatalogStore> {
    store: S,
}

impl<S: CatalogStore> ShelfApi<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add_book(&self, title: &str, author: &str, year: &str) -> Result<CmdResult> {
        commands::add::run(&self.store, title, author, year)
    }

    pub fn delete_book(&self, id: &str) -> Result<CmdResult> {
        commands::delete::run(&self.store, id)
    }

    pub fn search_books(&self, query: &str, field: &str) -> Result<CmdResult> {
        let field = parse_field(field)?;
        commands::search::run(&self.store, query, field)
    }

    pub fn list_books(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn change_status(&self, id: &str, status: &str) -> Result<CmdResult> {
        let status = parse_status(status)?;
        commands::status::run(&self.store, id, status)
    }
}

pub fn parse_field(raw: &str) -> Result<SearchField> {
    raw.parse().map_err(ShelfError::InvalidField)
}

pub fn parse_status(raw: &str) -> Result<Status> {
    raw.parse().map_err(ShelfError::InvalidStatus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use crate::test_utils::TestEnv;

    fn api() -> ShelfApi<InMemoryStore> {
        ShelfApi::new(
            StoreFixture::new()
                .with_book(1, "Poems", "Pushkin", "1825")
                .build(),
        )
    }

    #[test]
    fn invalid_field_fails_before_loading() {
        // Empty catalog would otherwise yield EmptyCatalog.
        let api = ShelfApi::new(InMemoryStore::new());
        let err = api.search_books("x", "isbn").unwrap_err();
        assert!(matches!(err, ShelfError::InvalidField(ref f) if f == "isbn"));
    }

    #[test]
    fn invalid_status_fails_before_loading() {
        let api = ShelfApi::new(InMemoryStore::new());
        let err = api.change_status("1", "lost").unwrap_err();
        assert!(matches!(err, ShelfError::InvalidStatus(_)));
    }

    #[test]
    fn malformed_id_is_not_found() {
        let err = api().delete_book("abc").unwrap_err();
        assert!(matches!(err, ShelfError::NotFound(ref s) if s == "abc"));
        let err = api().delete_book("0").unwrap_err();
        assert!(matches!(err, ShelfError::NotFound(_)));
    }

    #[test]
    fn empty_catalog_is_reported_before_the_id_is_read() {
        let api = ShelfApi::new(InMemoryStore::new());
        assert!(matches!(
            api.delete_book("abc").unwrap_err(),
            ShelfError::EmptyCatalog
        ));
        assert!(matches!(
            api.change_status("0", "available").unwrap_err(),
            ShelfError::EmptyCatalog
        ));
        // An unknown status still fails first.
        assert!(matches!(
            api.change_status("0", "lost").unwrap_err(),
            ShelfError::InvalidStatus(_)
        ));
    }

    #[test]
    fn ids_are_trimmed() {
        let api = api();
        api.delete_book(" 1 ").unwrap();
        assert!(api.store().snapshot().is_empty());
    }

    #[test]
    fn status_accepts_any_case() {
        let api = api();
        api.change_status("1", "Checked-Out").unwrap();
        let err = api.change_status("1", "CHECKED-OUT").unwrap_err();
        assert!(matches!(err, ShelfError::NoOp { .. }));
    }

    #[test]
    fn walkthrough_against_file_store() {
        let env = TestEnv::new();
        let api = ShelfApi::new(env.store());

        api.add_book("Poems", "Pushkin", "1825").unwrap();
        let added = api.add_book("Tales", "Chekhov", "1890").unwrap();
        assert_eq!(added.affected_books[0].id.to_string(), "2");
        assert_eq!(api.list_books().unwrap().listed_books.len(), 2);

        api.change_status("2", "checked-out").unwrap();
        assert!(matches!(
            api.change_status("2", "checked-out").unwrap_err(),
            ShelfError::NoOp { .. }
        ));

        let removed = api.delete_book("1").unwrap();
        assert_eq!(removed.affected_books[0].book.author, "Pushkin");

        // Highest remaining id is 2, so the next one is 3.
        let next = api.add_book("New", "Author", "2000").unwrap();
        assert_eq!(next.affected_books[0].id.to_string(), "3");

        let found = api.search_books("chekhov", "author").unwrap();
        assert_eq!(found.listed_books.len(), 1);
        assert_eq!(found.listed_books[0].book.status, Status::CheckedOut);
    }
}
