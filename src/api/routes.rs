//! API Routes
//!
//! Configures the Axum router with all catalog endpoints.

use axum::{
    http::{HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use super::handlers::{
    create_item_handler, get_item_handler, health_handler, list_items_handler,
    not_found_handler, stats_handler, AppState,
};
use crate::config::DEFAULT_CORS_ORIGIN;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/items` - List items (`q`, `page`, `limit`)
/// - `POST /api/items` - Create an item
/// - `GET /api/items/:id` - Fetch one item
/// - `GET /api/stats` - Item count and average price
/// - `GET /health` - Health check endpoint
///
/// Unmatched paths answer 404 with a JSON error body.
///
/// # Middleware
/// - CORS: Allows the configured frontend origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(allowed_origin(&state.cors_origin))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/api/items", get(list_items_handler).post(create_item_handler))
        .route("/api/items/:id", get(get_item_handler))
        .route("/api/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .fallback(not_found_handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn allowed_origin(origin: &str) -> AllowOrigin {
    match HeaderValue::from_str(origin) {
        Ok(value) => AllowOrigin::exact(value),
        Err(_) => {
            warn!(
                "Invalid CORS origin '{}', falling back to {}",
                origin, DEFAULT_CORS_ORIGIN
            );
            AllowOrigin::exact(HeaderValue::from_static(DEFAULT_CORS_ORIGIN))
        }
    }
}
