//! Item model
//!
//! The catalog record as persisted in the data file and returned by the API.

use serde::{Deserialize, Serialize};

/// A single catalog record.
///
/// Field order matches the persisted JSON layout: `id`, `name`, `quantity`, `price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique id, assigned at creation and never changed
    pub id: i64,
    /// Display name, used by the free-text filter
    pub name: String,
    /// Units in stock
    pub quantity: f64,
    /// Unit price
    pub price: f64,
}

impl Item {
    /// Returns true if the lower-cased name contains `needle`.
    ///
    /// `needle` must already be lower-cased.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
    }
}

/// A validated item that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub name: String,
    pub quantity: f64,
    pub price: f64,
}

impl NewItem {
    /// Attaches an id, producing the record to persist.
    pub fn with_id(self, id: i64) -> Item {
        Item {
            id,
            name: self.name,
            quantity: self.quantity,
            price: self.price,
        }
    }
}
