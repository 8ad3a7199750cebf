//! In-memory product repository using dashmap.

use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tracing::debug;

use catalog_core::result::AppResult;
use catalog_core::traits::Repository;
use catalog_entity::product::model::DEFAULT_AVAILABILITY;
use catalog_entity::product::{CreateProduct, Product};

/// Process-local product store.
///
/// Ids come from a monotonically increasing sequence starting at 1, so a
/// deleted id is never handed out again.
#[derive(Debug, Clone, Default)]
pub struct MemoryProductRepository {
    rows: Arc<DashMap<i64, Product>>,
    sequence: Arc<AtomicI64>,
}

impl MemoryProductRepository {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored products.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the store holds no products.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[async_trait]
impl Repository for MemoryProductRepository {
    type Entity = Product;
    type Id = i64;
    type Create = CreateProduct;

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        let mut products: Vec<Product> = self.rows.iter().map(|e| e.value().clone()).collect();
        products.sort_by(|a, b| b.id.cmp(&a.id));
        Ok(products)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        Ok(self.rows.get(&id).map(|e| e.value().clone()))
    }

    async fn create(&self, input: &CreateProduct) -> AppResult<Product> {
        let id = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        let now = Utc::now();
        let product = Product {
            id,
            name: input.name.clone(),
            price: input.price,
            availability: input.availability.unwrap_or(DEFAULT_AVAILABILITY),
            created_at: now,
            updated_at: now,
        };
        self.rows.insert(id, product.clone());
        debug!(id, "Inserted product into memory store");
        Ok(product)
    }

    async fn update(&self, product: &Product) -> AppResult<Option<Product>> {
        let Some(mut row) = self.rows.get_mut(&product.id) else {
            return Ok(None);
        };
        row.name.clone_from(&product.name);
        row.price = product.price;
        row.availability = product.availability;
        row.updated_at = Utc::now();
        Ok(Some(row.value().clone()))
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        Ok(self.rows.remove(&id).is_some())
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
