use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::entries;
use crate::store::CatalogStore;

/// Every record, in id order. Read-only.
pub fn run<S: CatalogStore>(store: &S) -> Result<CmdResult> {
    let catalog = store.require_nonempty()?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Books in catalog: {}",
        catalog.len()
    )));
    Ok(result.with_listed_books(entries(&catalog)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShelfError;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_all_records_in_id_order() {
        let store = StoreFixture::new()
            .with_book(10, "Ten", "A", "2010")
            .with_book(2, "Two", "B", "2002")
            .with_book(1, "One", "C", "2001")
            .build();

        let result = run(&store).unwrap();
        let titles: Vec<&str> = result
            .listed_books
            .iter()
            .map(|e| e.book.title.as_str())
            .collect();
        assert_eq!(titles, vec!["One", "Two", "Ten"]);
        assert_eq!(result.messages[0].content, "Books in catalog: 3");
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn empty_catalog_is_an_error() {
        assert!(matches!(
            run(&InMemoryStore::new()).unwrap_err(),
            ShelfError::EmptyCatalog
        ));
    }
}
