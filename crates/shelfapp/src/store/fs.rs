use super::CatalogStore;
use crate::error::{Result, ShelfError};
use crate::model::Catalog;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

const INDENT: &[u8] = b"    ";

/// Catalog stored as a single JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> PathBuf {
        match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(ShelfError::Io)?;
        }
        Ok(())
    }

    fn write_atomic(&self, catalog: &Catalog) -> Result<()> {
        let dir = self.parent_dir();
        self.ensure_dir(&dir)?;

        let content = encode(catalog)?;
        let stem = self
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("catalog");
        let tmp_file = dir.join(format!(".{}-{}.tmp", stem, Uuid::new_v4()));

        fs::write(&tmp_file, content).map_err(ShelfError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(ShelfError::Io(e));
        }
        Ok(())
    }
}

/// Pretty JSON with four-space indentation and raw UTF-8, newline terminated.
fn encode(catalog: &Catalog) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    catalog
        .serialize(&mut ser)
        .map_err(ShelfError::Serialization)?;
    buf.push(b'\n');
    Ok(buf)
}

impl CatalogStore for FileStore {
    fn load(&self) -> Result<Catalog> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "catalog file missing, initializing");
            let empty = Catalog::new();
            self.write_atomic(&empty)?;
            return Ok(empty);
        }

        let content = fs::read_to_string(&self.path).map_err(ShelfError::Io)?;
        let catalog: Catalog =
            serde_json::from_str(&content).map_err(ShelfError::Serialization)?;
        debug!(path = %self.path.display(), records = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    fn save(&self, catalog: &Catalog) -> Result<()> {
        match self.write_atomic(catalog) {
            Ok(()) => {
                debug!(path = %self.path.display(), records = catalog.len(), "catalog saved");
                Ok(())
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "catalog save failed");
                Err(e)
            }
        }
    }
}
