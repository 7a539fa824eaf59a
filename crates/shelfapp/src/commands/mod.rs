//! # Command Layer
//!
//! The business logic of the tracker. Each operation lives in its own submodule
//! as a plain function over a [`CatalogStore`](crate::store::CatalogStore).
//!
//! Every command is a fresh load-mutate-save cycle: the catalog is read at the
//! start, changed in memory, and written back whole. Nothing is cached between
//! calls.
//!
//! ## What Commands Do NOT Do
//!
//! - **Any terminal I/O**: no stdout, stderr or prompts
//! - **Argument parsing**: ids, fields and statuses arrive typed
//! - **Exit codes**: return `Result`, let the caller decide
//!
//! ## Structured Returns
//!
//! Commands return [`CmdResult`]:
//! - `affected_books`: records created, removed or changed
//! - `listed_books`: records to display (list, search)
//! - `messages`: leveled confirmations (info, success)
//!
//! ## Command Modules
//!
//! - [`add`]: Create a record with the next free id
//! - [`delete`]: Remove a record by id
//! - [`search`]: Exact, case-insensitive match on one field
//! - [`list`]: Every record
//! - [`status`]: Flip a record between available and checked-out
//! - [`helpers`]: Id generation

use crate::model::BookEntry;
use serde::Serialize;

pub mod add;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod search;
pub mod status;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_books: Vec<BookEntry>,
    pub listed_books: Vec<BookEntry>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_books(mut self, books: Vec<BookEntry>) -> Self {
        self.affected_books = books;
        self
    }

    pub fn with_listed_books(mut self, books: Vec<BookEntry>) -> Self {
        self.listed_books = books;
        self
    }
}
