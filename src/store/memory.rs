//! In-Memory Store
//!
//! Keeps the collection in process memory. A version counter, bumped on
//! every save, stands in for the file modification time.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::models::Item;
use crate::store::{DataStore, Mtime};

#[derive(Debug, Default)]
struct MemoryState {
    items: Vec<Item>,
    version: u64,
}

// == Memory Store ==
/// Store backed by a `Vec<Item>` behind an async lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    /// Creates an empty store at version 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with `items` at version 0.
    pub fn with_items(items: Vec<Item>) -> Self {
        Self {
            state: RwLock::new(MemoryState { items, version: 0 }),
        }
    }
}

#[async_trait]
impl DataStore for MemoryStore {
    async fn load(&self) -> Result<Vec<Item>> {
        Ok(self.state.read().await.items.clone())
    }

    async fn save(&self, items: &[Item]) -> Result<()> {
        let mut state = self.state.write().await;
        state.items = items.to_vec();
        state.version += 1;
        Ok(())
    }

    async fn stat_mtime(&self) -> Result<Mtime> {
        Ok(Mtime::from(self.state.read().await.version))
    }
}
