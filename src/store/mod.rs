//! Data Store Module
//!
//! Persistence collaborator for the catalog: load and save the whole
//! collection, and expose a change signal for cache invalidation.

mod json_file;
mod memory;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::Item;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Change signal of a store.
///
/// For files this is the modification time in nanoseconds since the Unix
/// epoch; other stores may use any value that changes on every write.
pub type Mtime = u128;

/// Backing storage for the item collection.
///
/// All failures are reported as [`crate::error::CatalogError::StoreUnavailable`].
#[async_trait]
pub trait DataStore: Send + Sync {
    /// Reads the full collection in persisted order.
    async fn load(&self) -> Result<Vec<Item>>;

    /// Replaces the persisted collection with `items`.
    async fn save(&self, items: &[Item]) -> Result<()>;

    /// Returns the current change signal.
    async fn stat_mtime(&self) -> Result<Mtime>;
}
