use crate::store::fs::FileStore;
use std::path::PathBuf;
use tempfile::TempDir;

/// A catalog file inside a throwaway directory.
pub struct TestEnv {
    // Held so the directory lives as long as the test.
    pub _temp_dir: TempDir,
    pub data_file: PathBuf,
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

impl TestEnv {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
        let data_file = temp_dir.path().join("catalog.json");
        Self {
            _temp_dir: temp_dir,
            data_file,
        }
    }

    /// A fresh store over this environment's catalog file.
    pub fn store(&self) -> FileStore {
        FileStore::new(&self.data_file)
    }
}
