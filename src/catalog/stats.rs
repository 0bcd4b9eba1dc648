//! Stats Cache Module
//!
//! Single-slot memoization of the collection aggregate, invalidated when the
//! store's change signal (file mtime, version counter) moves.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::Result;
use crate::models::Item;
use crate::store::Mtime;

// == Stats Result ==
/// Aggregate summary of the collection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResult {
    /// Number of items
    pub total: usize,
    /// Arithmetic mean of `price`, 0 for an empty collection
    pub average_price: f64,
}

impl StatsResult {
    /// Computes count and average price over `items`.
    pub fn compute(items: &[Item]) -> Self {
        let total = items.len();
        let average_price = if total == 0 {
            0.0
        } else {
            items.iter().map(|item| item.price).sum::<f64>() / total as f64
        };

        Self {
            total,
            average_price,
        }
    }
}

// == Cache Counters ==
/// Snapshot of how the cache has been used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct CacheCounters {
    /// Lookups answered from the slot
    pub hits: u64,
    /// Lookups that reloaded the collection
    pub recomputations: u64,
}

impl CacheCounters {
    /// Returns hits / (hits + recomputations), or 0.0 before the first lookup.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.recomputations;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct CacheSlot {
    result: StatsResult,
    mtime: Mtime,
}

// == Stats Cache ==
/// Holds the last computed stats and the change signal they belong to.
///
/// The slot is empty on construction and is replaced as a whole on every
/// miss. Recomputation runs without holding the lock, so concurrent misses
/// may each reload; the last write wins.
#[derive(Debug)]
pub struct StatsCache {
    slot: RwLock<Option<CacheSlot>>,
    hits: AtomicU64,
    recomputations: AtomicU64,
}

impl StatsCache {
    // == Constructor ==
    /// Creates a cache with an empty slot.
    pub fn new() -> Self {
        Self {
            slot: RwLock::new(None),
            hits: AtomicU64::new(0),
            recomputations: AtomicU64::new(0),
        }
    }

    // == Get Or Compute ==
    /// Returns the cached stats if they were computed for `mtime`,
    /// otherwise calls `load`, recomputes and stores the result.
    ///
    /// Errors from `load` are returned as-is and leave the slot unchanged.
    pub async fn get_or_compute<F, Fut>(&self, mtime: Mtime, load: F) -> Result<StatsResult>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Item>>>,
    {
        let cached = *self.slot.read().await;
        if let Some(slot) = cached.filter(|slot| slot.mtime == mtime) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!("Stats cache hit (mtime {})", mtime);
            return Ok(slot.result);
        }

        let items = load().await?;
        let result = StatsResult::compute(&items);

        *self.slot.write().await = Some(CacheSlot { result, mtime });
        self.recomputations.fetch_add(1, Ordering::Relaxed);
        info!(
            "Stats recomputed: total={}, average_price={} (mtime {})",
            result.total, result.average_price, mtime
        );

        Ok(result)
    }

    // == Counters ==
    /// Returns the current hit/recompute counters.
    pub fn counters(&self) -> CacheCounters {
        CacheCounters {
            hits: self.hits.load(Ordering::Relaxed),
            recomputations: self.recomputations.load(Ordering::Relaxed),
        }
    }
}

impl Default for StatsCache {
    fn default() -> Self {
        Self::new()
    }
}
