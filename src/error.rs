//! Error types for the catalog service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::ErrorResponse;
use thiserror::Error;

// == Catalog Error Enum ==
/// Unified error type for the catalog service.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Request data failed validation (bad draft, unparseable query parameter)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// No item matched the requested id
    #[error("Not found: {0}")]
    NotFound(String),

    /// The backing data store could not be read, written or stat'ed
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            CatalogError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            CatalogError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            CatalogError::StoreUnavailable(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the catalog service.
pub type Result<T> = std::result::Result<T, CatalogError>;
