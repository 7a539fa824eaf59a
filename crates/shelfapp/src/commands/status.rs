//! # Availability Status
//!
//! A record is either `available` or `checked-out`. The only transitions are
//! between the two, and a request must name the state the record is *not* in:
//! asking for the current state fails with [`ShelfError::NoOp`] rather than
//! succeeding silently.
//!
//! Checks run in a fixed order: the status has already been parsed by the
//! caller, then the catalog must be non-empty, then the id must name a record.

use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, ShelfError};
use crate::model::{BookEntry, Status};
use crate::store::CatalogStore;
use tracing::info;

use super::helpers::parse_id;

pub fn run<S: CatalogStore>(
    store: &S,
    raw_id: &str,
    new_status: Status,
) -> Result<CmdResult> {
    let mut catalog = store.require_nonempty()?;
    let id = parse_id(raw_id)?;
    let book = catalog
        .get_mut(&id)
        .ok_or_else(|| ShelfError::NotFound(id.to_string()))?;

    if book.status == new_status {
        return Err(ShelfError::NoOp {
            id,
            status: new_status,
        });
    }

    let old_status = book.status;
    book.status = new_status;
    let entry = BookEntry::new(id, book.clone());
    store.save(&catalog)?;
    info!(%id, from = %old_status, to = %new_status, "status changed");

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Status of book with ID {} changed to {}",
        id, new_status
    )));
    Ok(result.with_affected_books(vec![entry]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::BookId;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn id(n: u64) -> BookId {
        BookId::new(n).unwrap()
    }

    fn store() -> InMemoryStore {
        StoreFixture::new()
            .with_book(1, "Poems", "Pushkin", "1825")
            .with_checked_out_book(2, "Tales", "Chekhov", "1890")
            .build()
    }

    #[test]
    fn checks_out_an_available_book() {
        let store = store();
        let result = run(&store, "1", Status::CheckedOut).unwrap();
        assert_eq!(result.affected_books[0].book.status, Status::CheckedOut);
        assert_eq!(store.snapshot()[&id(1)].status, Status::CheckedOut);
        assert!(result.messages[0].content.contains("checked-out"));
    }

    #[test]
    fn returns_a_checked_out_book() {
        let store = store();
        run(&store, "2", Status::Available).unwrap();
        assert_eq!(store.snapshot()[&id(2)].status, Status::Available);
    }

    #[test]
    fn repeating_a_change_is_a_no_op_error() {
        let store = store();
        run(&store, "1", Status::CheckedOut).unwrap();
        let err = run(&store, "1", Status::CheckedOut).unwrap_err();
        assert!(matches!(
            err,
            ShelfError::NoOp {
                status: Status::CheckedOut,
                ..
            }
        ));
        assert_eq!(store.save_count(), 1);
    }

    #[test]
    fn unknown_id_is_not_found() {
        let err = run(&store(), "9", Status::Available).unwrap_err();
        assert!(matches!(err, ShelfError::NotFound(_)));
    }

    #[test]
    fn empty_catalog_is_reported() {
        let err = run(&InMemoryStore::new(), "1", Status::Available).unwrap_err();
        assert!(matches!(err, ShelfError::EmptyCatalog));
    }

    #[test]
    fn empty_catalog_wins_over_malformed_id() {
        for raw in ["0", "abc", ""] {
            let err = run(&InMemoryStore::new(), raw, Status::Available).unwrap_err();
            assert!(matches!(err, ShelfError::EmptyCatalog));
        }
    }

    #[test]
    fn malformed_id_is_not_found() {
        let err = run(&store(), "0", Status::Available).unwrap_err();
        assert!(matches!(err, ShelfError::NotFound(ref s) if s == "0"));
    }

    #[test]
    fn failed_save_keeps_previous_status() {
        let store = store();
        store.set_simulate_write_error(true);
        assert!(run(&store, "1", Status::CheckedOut)
            .unwrap_err()
            .is_persistence());
        assert_eq!(store.snapshot()[&id(1)].status, Status::Available);
    }
}
