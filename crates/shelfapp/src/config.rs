//! # Configuration
//!
//! The only setting is where the catalog lives. It is resolved once at startup
//! and handed to [`FileStore::new`](crate::store::fs::FileStore::new); nothing
//! reads it afterwards.
//!
//! ## Resolution Order
//!
//! 1. **Explicit override**: `--file` on the command line.
//! 2. **Environment**: `SHELF_DATA_FILE`.
//! 3. **Config file**: `data_file` in `shelf.toml` under the OS config directory.
//! 4. **Default**: `catalog.json` under the OS data directory.
//!
//! Layers 2 and 3 are handled by [`confique`].

use crate::error::{Result, ShelfError};
use confique::Config;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "shelf.toml";
pub const DEFAULT_DATA_FILENAME: &str = "catalog.json";
pub const DATA_FILE_ENV: &str = "SHELF_DATA_FILE";

#[derive(Config, Debug, Clone, PartialEq, Eq, Default)]
pub struct ShelfConfig {
    /// Path of the JSON catalog file.
    #[config(env = "SHELF_DATA_FILE")]
    pub data_file: Option<PathBuf>,
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "shelf", "shelf")
}

/// Location of `shelf.toml`, if the platform has a config directory.
pub fn default_config_path() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join(CONFIG_FILENAME))
}

impl ShelfConfig {
    /// Loads from the environment and, if present, the given TOML file.
    /// A missing file is not an error.
    pub fn load(config_file: Option<&Path>) -> Result<Self> {
        let mut builder = ShelfConfig::builder().env();
        if let Some(path) = config_file {
            builder = builder.file(path);
        }
        builder
            .load()
            .map_err(|e| ShelfError::Config(e.to_string()))
    }

    /// Final path of the catalog file. `override_path` wins over anything
    /// loaded; without either, falls back to the OS data directory.
    pub fn resolve_data_file(&self, override_path: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = override_path.or_else(|| self.data_file.clone()) {
            return Ok(path);
        }
        project_dirs()
            .map(|dirs| dirs.data_dir().join(DEFAULT_DATA_FILENAME))
            .ok_or_else(|| {
                ShelfError::Config(format!(
                    "Could not determine a data directory; set {} or pass --file",
                    DATA_FILE_ENV
                ))
            })
    }
}
