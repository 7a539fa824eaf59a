use super::CatalogStore;
use crate::error::{Result, ShelfError};
use crate::model::Catalog;
use std::cell::{Cell, RefCell};

/// In-memory storage for testing.
///
/// Uses `RefCell` since the tracker is single-threaded and the
/// `CatalogStore` trait takes `&self` everywhere.
#[derive(Default)]
pub struct InMemoryStore {
    catalog: RefCell<Catalog>,
    saves: Cell<usize>,
    simulate_write_error: Cell<bool>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog: RefCell::new(catalog),
            ..Self::default()
        }
    }

    /// Make every following `save` fail until switched off again.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.simulate_write_error.set(simulate);
    }

    /// Number of successful saves so far.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    pub fn snapshot(&self) -> Catalog {
        self.catalog.borrow().clone()
    }
}

impl CatalogStore for InMemoryStore {
    fn load(&self) -> Result<Catalog> {
        Ok(self.catalog.borrow().clone())
    }

    fn save(&self, catalog: &Catalog) -> Result<()> {
        if self.simulate_write_error.get() {
            return Err(ShelfError::Store("Simulated write error".to_string()));
        }
        *self.catalog.borrow_mut() = catalog.clone();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Book, BookId, Status};

    /// Builder for a pre-populated [`InMemoryStore`].
    #[derive(Default)]
    pub struct StoreFixture {
        catalog: Catalog,
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_book(mut self, id: u64, title: &str, author: &str, year: &str) -> Self {
            let id = BookId::new(id).expect("fixture ids are positive");
            self.catalog.insert(id, Book::new(title, author, year));
            self
        }

        pub fn with_checked_out_book(
            mut self,
            id: u64,
            title: &str,
            author: &str,
            year: &str,
        ) -> Self {
            let id = BookId::new(id).expect("fixture ids are positive");
            let mut book = Book::new(title, author, year);
            book.status = Status::CheckedOut;
            self.catalog.insert(id, book);
            self
        }

        pub fn build(self) -> InMemoryStore {
            InMemoryStore::with_catalog(self.catalog)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn save_replaces_catalog() {
        let store = StoreFixture::new().with_book(1, "A", "B", "2000").build();
        store.save(&Catalog::new()).unwrap();
        assert!(store.load().unwrap().is_empty());
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn simulated_write_error_keeps_previous_catalog() {
        let store = StoreFixture::new().with_book(1, "A", "B", "2000").build();
        store.set_simulate_write_error(true);
        let err = store.save(&Catalog::new()).unwrap_err();
        assert!(err.is_persistence());
        assert_eq!(store.load().unwrap().len(), 1);
    }
}
