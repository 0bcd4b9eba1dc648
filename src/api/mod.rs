//! API Module
//!
//! HTTP handlers and routing for the catalog REST API.
//!
//! # Endpoints
//! - `GET /api/items` - List items with search and pagination
//! - `POST /api/items` - Create an item
//! - `GET /api/items/:id` - Fetch an item by id
//! - `GET /api/stats` - Item count and average price
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
