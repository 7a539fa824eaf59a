//! # Shelf Architecture
//!
//! Shelf is a single-user inventory tracker for a book catalog. The library is
//! UI-agnostic; the `shelf` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI (crates/shelf)                                         │
//! │  - Argument parsing, interactive menu, rendering            │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API (api.rs)                                               │
//! │  - Parses raw ids, field names and statuses                 │
//! │  - Dispatches to commands                                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Commands (commands/*.rs)                                   │
//! │  - add, delete, search, list, change status                 │
//! │  - Load, mutate in memory, save                             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store/)                                             │
//! │  - CatalogStore trait: whole-catalog load/save              │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors
//!
//! Every failure is a [`error::ShelfError`] variant, so callers can branch on
//! the cause. [`error::ShelfError::is_persistence`] separates I/O trouble from
//! caller mistakes.
//!
//! ## Module Overview
//!
//! - [`api`]: The facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Book`, `BookId`, `Status`, `SearchField`, `Catalog`
//! - [`config`]: Backing-file location
//! - [`error`]: Error type

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
