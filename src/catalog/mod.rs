//! Catalog Module
//!
//! Item query/pagination engine, the stats cache, and the service that
//! binds both to a data store.

mod query;
mod service;
mod stats;


// Re-export public types
pub use query::{
    append, create, find_by_id, next_item_id, parse_id, query, ItemQuery, QueryResult,
    ITEM_NOT_FOUND_MESSAGE,
};
pub use service::Catalog;
pub use stats::{CacheCounters, StatsCache, StatsResult};
