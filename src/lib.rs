//! Catalog Service - A small item catalog REST API
//!
//! Serves a JSON-file-backed item collection with search and pagination,
//! plus count/average-price stats cached against the file's mtime.

pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{create_router, AppState};
pub use config::Config;
pub use error::{CatalogError, Result};
