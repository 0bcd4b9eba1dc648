//! API Handlers
//!
//! HTTP request handlers for each catalog endpoint.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use tracing::debug;

use crate::catalog::{Catalog, QueryResult, StatsResult};
use crate::config::{Config, DEFAULT_CORS_ORIGIN};
use crate::error::{CatalogError, Result};
use crate::models::{requests::INVALID_ITEM_MESSAGE, HealthResponse, Item, ItemDraft, ListParams};
use crate::store::{DataStore, JsonFileStore};

/// Application state shared across all handlers.
///
/// The catalog owns the stats cache, so one `AppState` means one cache slot
/// for the lifetime of the server.
#[derive(Clone)]
pub struct AppState {
    /// Catalog service over the configured data store
    pub catalog: Arc<Catalog>,
    /// Origin allowed by the CORS layer
    pub cors_origin: String,
}

impl AppState {
    /// Creates a new AppState over the given data store.
    pub fn new(store: Arc<dyn DataStore>) -> Self {
        Self {
            catalog: Arc::new(Catalog::new(store)),
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Uses a JSON file store at the configured data path.
    pub fn from_config(config: &Config) -> Self {
        let store = Arc::new(JsonFileStore::new(config.data_path.clone()));
        Self {
            cors_origin: config.cors_origin.clone(),
            ..Self::new(store)
        }
    }
}

/// Handler for GET /api/items
///
/// Returns one page of items, optionally filtered by `q`.
pub async fn list_items_handler(
    State(state): State<AppState>,
    params: std::result::Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<QueryResult>> {
    let Query(params) = params.map_err(|rejection| {
        CatalogError::InvalidInput(format!("Invalid query string: {}", rejection.body_text()))
    })?;
    let query = params.parse()?;
    debug!("Listing items: {:?}", query);

    let result = state.catalog.list(&query).await?;
    Ok(Json(result))
}

/// Handler for GET /api/items/:id
pub async fn get_item_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Item>> {
    let item = state.catalog.get_by_id(&id).await?;
    Ok(Json(item))
}

/// Handler for POST /api/items
///
/// Validates the body, persists the new item and returns it with 201.
pub async fn create_item_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<ItemDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<Item>)> {
    let Json(draft) = payload.map_err(|rejection| {
        debug!("Rejected item body: {}", rejection);
        CatalogError::InvalidInput(INVALID_ITEM_MESSAGE.to_string())
    })?;

    let item = state.catalog.create(&draft).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Handler for GET /api/stats
///
/// Returns count and average price, served from cache while the data
/// file is unchanged.
pub async fn stats_handler(State(state): State<AppState>) -> Result<Json<StatsResult>> {
    let stats = state.catalog.stats().await?;
    Ok(Json(stats))
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.catalog.cache_counters()))
}

/// Fallback for unmatched routes.
pub async fn not_found_handler() -> CatalogError {
    CatalogError::NotFound("Not Found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemQuery;
    use crate::store::MemoryStore;

    fn sample() -> Vec<Item> {
        vec![
            Item {
                id: 1,
                name: "Item A".to_string(),
                quantity: 10.0,
                price: 5.0,
            },
            Item {
                id: 2,
                name: "Item B".to_string(),
                quantity: 20.0,
                price: 10.0,
            },
        ]
    }

    fn test_state() -> AppState {
        AppState::new(Arc::new(MemoryStore::with_items(sample())))
    }

    #[tokio::test]
    async fn test_list_handler_with_limit() {
        let params = ListParams {
            limit: Some("1".to_string()),
            ..Default::default()
        };
        let response = list_items_handler(State(test_state()), Ok(Query(params)))
            .await
            .unwrap();

        assert_eq!(response.limit, 1);
        assert_eq!(response.total, 2);
        assert_eq!(response.items.len(), 1);
    }

    #[tokio::test]
    async fn test_list_handler_rejects_bad_page() {
        let params = ListParams {
            page: Some("first".to_string()),
            ..Default::default()
        };
        let result = list_items_handler(State(test_state()), Ok(Query(params))).await;
        assert!(matches!(result, Err(CatalogError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_get_item_handler() {
        let response = get_item_handler(State(test_state()), Path("2".to_string()))
            .await
            .unwrap();
        assert_eq!(response.name, "Item B");
    }

    #[tokio::test]
    async fn test_get_item_handler_not_found() {
        let result = get_item_handler(State(test_state()), Path("999".to_string())).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_create_item_handler() {
        let state = test_state();
        let draft: ItemDraft =
            serde_json::from_str(r#"{"name": "Item C", "quantity": 5, "price": 7}"#).unwrap();

        let (status, Json(item)) = create_item_handler(State(state.clone()), Ok(Json(draft)))
            .await
            .unwrap();
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(item.name, "Item C");

        let listed = state.catalog.list(&ItemQuery::default()).await.unwrap();
        assert_eq!(listed.total, 3);
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let response = stats_handler(State(test_state())).await.unwrap();
        assert_eq!(response.total, 2);
        assert_eq!(response.average_price, 7.5);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let state = test_state();
        stats_handler(State(state.clone())).await.unwrap();

        let response = health_handler(State(state)).await;
        assert_eq!(response.status, "healthy");
        assert_eq!(response.stats_cache.recomputations, 1);
    }
}
