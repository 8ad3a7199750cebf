//! Product entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Availability assigned to products created without one.
pub const DEFAULT_AVAILABILITY: bool = true;

/// A catalog product as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-generated identifier; never reused.
    pub id: i64,
    /// Display name, never empty.
    pub name: String,
    /// Unit price, always greater than zero.
    pub price: f64,
    /// Whether the product can currently be ordered.
    pub availability: bool,
    /// When the row was inserted.
    pub created_at: DateTime<Utc>,
    /// When the row was last persisted.
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Overwrite every mutable field from a full update.
    pub fn apply(&mut self, update: &UpdateProduct) {
        self.name.clone_from(&update.name);
        self.price = update.price;
        self.availability = update.availability;
    }

    /// Flip availability and return the new value.
    pub fn toggle_availability(&mut self) -> bool {
        self.availability = !self.availability;
        self.availability
    }
}

/// A product without its bookkeeping timestamps, as listed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSummary {
    /// Identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Availability flag.
    pub availability: bool,
}

impl From<Product> for ProductSummary {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            availability: product.availability,
        }
    }
}

/// Data required to create a new product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateProduct {
    /// Display name.
    pub name: String,
    /// Unit price.
    pub price: f64,
    /// Initial availability; [`DEFAULT_AVAILABILITY`] when `None`.
    pub availability: Option<bool>,
}

/// Replacement values for a full update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateProduct {
    /// New display name.
    pub name: String,
    /// New unit price.
    pub price: f64,
    /// New availability.
    pub availability: bool,
}
