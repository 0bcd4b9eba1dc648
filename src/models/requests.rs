//! Request DTOs for the catalog API
//!
//! Defines the raw shape of incoming query strings and bodies, and the
//! parse/validate steps that turn them into typed values.

use serde::Deserialize;
use serde_json::Value;

use crate::catalog::ItemQuery;
use crate::error::{CatalogError, Result};
use crate::models::NewItem;

/// Error message returned for any rejected item body
pub const INVALID_ITEM_MESSAGE: &str = "Invalid item data";

/// Raw query string of the list endpoint (GET /api/items)
///
/// # Fields
/// - `q`: Optional case-insensitive substring to match against item names
/// - `page`: Optional page number, 1-based
/// - `limit`: Optional page size
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub page: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
}

impl ListParams {
    /// Parses the raw strings into an [`ItemQuery`].
    ///
    /// Empty values count as absent. Negative or zero numbers are accepted
    /// here; the query engine turns them into an empty page.
    pub fn parse(&self) -> Result<ItemQuery> {
        Ok(ItemQuery {
            q: self.q.clone().filter(|q| !q.is_empty()),
            page: parse_integer("page", self.page.as_deref())?,
            limit: parse_integer("limit", self.limit.as_deref())?,
        })
    }
}

fn parse_integer(name: &str, raw: Option<&str>) -> Result<Option<i64>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse::<i64>().map(Some).map_err(|_| {
            CatalogError::InvalidInput(format!(
                "Invalid query parameter '{}': expected an integer, got '{}'",
                name, value
            ))
        }),
    }
}

/// Request body for item creation (POST /api/items)
///
/// Fields are kept as loose JSON so type mismatches surface as
/// [`CatalogError::InvalidInput`] from [`ItemDraft::validate`] rather than
/// as an extractor rejection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemDraft {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub quantity: Option<Value>,
    #[serde(default)]
    pub price: Option<Value>,
}

impl ItemDraft {
    /// Validates the draft.
    ///
    /// `name` must be a non-empty string; `quantity` and `price` must be
    /// JSON numbers.
    pub fn validate(&self) -> Result<NewItem> {
        let name = match &self.name {
            Some(Value::String(name)) if !name.is_empty() => name.clone(),
            _ => return Err(invalid_item()),
        };
        let quantity = as_number(&self.quantity).ok_or_else(invalid_item)?;
        let price = as_number(&self.price).ok_or_else(invalid_item)?;

        Ok(NewItem {
            name,
            quantity,
            price,
        })
    }
}

fn as_number(value: &Option<Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        _ => None,
    }
}

fn invalid_item() -> CatalogError {
    CatalogError::InvalidInput(INVALID_ITEM_MESSAGE.to_string())
}
