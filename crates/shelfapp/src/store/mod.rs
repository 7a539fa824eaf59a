//! # Storage Layer
//!
//! The catalog is persisted as one unit. The [`CatalogStore`] trait exposes
//! exactly that: load everything, save everything. There is no per-record
//! primitive at this boundary.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: a single JSON file at a configured path.
//!   - Missing file is initialized to `{}` on first load.
//!   - Saves go to a temp file in the same directory and are renamed over the
//!     target, so an interrupted write leaves the previous catalog in place.
//! - [`memory::InMemoryStore`]: for testing command logic without the filesystem.
//!
//! ## Concurrency
//!
//! None. One process, whole-file read, whole-file overwrite, no lock. Two
//! processes sharing a file race and the last writer wins.

use crate::error::{Result, ShelfError};
use crate::model::Catalog;

pub mod fs;
pub mod memory;

/// Whole-catalog persistence.
pub trait CatalogStore {
    /// Read the full catalog.
    fn load(&self) -> Result<Catalog>;

    /// Replace the persisted catalog with `catalog`.
    fn save(&self, catalog: &Catalog) -> Result<()>;

    /// Load, failing with [`ShelfError::EmptyCatalog`] when there are no records.
    fn require_nonempty(&self) -> Result<Catalog> {
        let catalog = self.load()?;
        if catalog.is_empty() {
            return Err(ShelfError::EmptyCatalog);
        }
        Ok(catalog)
    }
}
