//! JSON File Store
//!
//! Keeps the whole collection as a pretty-printed JSON array in one file.

use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use async_trait::async_trait;
use tracing::warn;

use crate::error::{CatalogError, Result};
use crate::models::Item;
use crate::store::{DataStore, Mtime};

// == JSON File Store ==
/// File-backed store. The file's modification time is the change signal.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    /// Location of the JSON array
    path: PathBuf,
}

impl JsonFileStore {
    // == Constructor ==
    /// Creates a store over `path`. The file is not touched until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn unavailable(&self, action: &str, err: impl std::fmt::Display) -> CatalogError {
        let message = format!("Failed to {} {}: {}", action, self.path.display(), err);
        warn!("{}", message);
        CatalogError::StoreUnavailable(message)
    }
}

#[async_trait]
impl DataStore for JsonFileStore {
    // == Load ==
    async fn load(&self) -> Result<Vec<Item>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.unavailable("read", e))?;

        serde_json::from_str(&raw).map_err(|e| self.unavailable("parse", e))
    }

    // == Save ==
    async fn save(&self, items: &[Item]) -> Result<()> {
        let json =
            serde_json::to_string_pretty(items).map_err(|e| self.unavailable("serialize", e))?;

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| self.unavailable("write", e))
    }

    // == Stat Mtime ==
    async fn stat_mtime(&self) -> Result<Mtime> {
        let metadata = tokio::fs::metadata(&self.path)
            .await
            .map_err(|e| self.unavailable("stat", e))?;

        let modified = metadata
            .modified()
            .map_err(|e| self.unavailable("stat", e))?;

        modified
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .map_err(|e| self.unavailable("stat", e))
    }
}
