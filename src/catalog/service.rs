//! Catalog Service
//!
//! Entry points used by the HTTP layer. Each call loads a fresh snapshot
//! from the data store and hands it to the pure query functions.

use std::sync::Arc;

use tracing::info;

use crate::catalog::query::{self, ItemQuery, QueryResult, ITEM_NOT_FOUND_MESSAGE};
use crate::catalog::stats::{CacheCounters, StatsCache, StatsResult};
use crate::error::{CatalogError, Result};
use crate::models::{Item, ItemDraft};
use crate::store::DataStore;

// == Catalog ==
/// Owns the data store handle and the stats cache for the serving process.
pub struct Catalog {
    store: Arc<dyn DataStore>,
    stats: StatsCache,
}

impl Catalog {
    // == Constructor ==
    /// Creates a catalog over `store` with an empty stats cache.
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self {
            store,
            stats: StatsCache::new(),
        }
    }

    // == List ==
    /// Returns one filtered page of the collection.
    pub async fn list(&self, params: &ItemQuery) -> Result<QueryResult> {
        let items = self.store.load().await?;
        Ok(query::query(&items, params))
    }

    // == Get By Id ==
    /// Looks up an item by the id segment of a request path.
    pub async fn get_by_id(&self, raw_id: &str) -> Result<Item> {
        let items = self.store.load().await?;
        match query::parse_id(raw_id) {
            Some(id) => query::find_by_id(&items, id),
            None => Err(CatalogError::NotFound(ITEM_NOT_FOUND_MESSAGE.to_string())),
        }
    }

    // == Create ==
    /// Validates `draft`, appends it and persists the collection.
    ///
    /// Validation happens before the store is read, so a bad draft is
    /// rejected even when the store is unavailable.
    pub async fn create(&self, draft: &ItemDraft) -> Result<Item> {
        let new_item = draft.validate()?;

        let mut items = self.store.load().await?;
        let item = query::create(&mut items, new_item);
        self.store.save(&items).await?;

        info!("Created item {} ({})", item.id, item.name);
        Ok(item)
    }

    // == Stats ==
    /// Returns count and average price, reloading only when the store's
    /// change signal differs from the cached one.
    pub async fn stats(&self) -> Result<StatsResult> {
        let mtime = self.store.stat_mtime().await?;
        self.stats.get_or_compute(mtime, || self.store.load()).await
    }

    /// Returns the stats cache counters.
    pub fn cache_counters(&self) -> CacheCounters {
        self.stats.counters()
    }
}
