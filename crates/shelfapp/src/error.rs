use crate::model::{BookId, Status};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("The catalog is empty")]
    EmptyCatalog,

    #[error("Book with ID {0} not found")]
    NotFound(String),

    #[error("Invalid search field: {0} (expected title, author or year)")]
    InvalidField(String),

    #[error("Invalid status: {0} (expected available or checked-out)")]
    InvalidStatus(String),

    #[error("No books match the search criteria")]
    NoResults,

    #[error("Book with ID {id} is already {status}")]
    NoOp { id: BookId, status: Status },

    #[error("Invalid input: {0}")]
    Validation(String),
}

impl ShelfError {
    /// True for failures reading or writing the backing file. Everything else
    /// is a caller mistake.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            ShelfError::Io(_) | ShelfError::Serialization(_) | ShelfError::Store(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ShelfError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persistence_kinds_are_flagged() {
        let io = ShelfError::Io(std::io::Error::other("disk gone"));
        assert!(io.is_persistence());
        assert!(ShelfError::Store("x".into()).is_persistence());
        assert!(!ShelfError::EmptyCatalog.is_persistence());
        assert!(!ShelfError::NotFound("9".into()).is_persistence());
    }

    #[test]
    fn no_op_message_names_the_status() {
        let err = ShelfError::NoOp {
            id: BookId::new(2).unwrap(),
            status: Status::CheckedOut,
        };
        assert_eq!(err.to_string(), "Book with ID 2 is already checked-out");
    }
}
