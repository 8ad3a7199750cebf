//! Store selection: builds the configured product repository.

use std::sync::Arc;

use tracing::info;

use catalog_core::config::{DatabaseConfig, StoreProvider};
use catalog_core::result::AppResult;
use catalog_core::traits::Repository;
use catalog_entity::product::{CreateProduct, Product};

use crate::connection::DatabasePool;
use crate::repositories::{MemoryProductRepository, PostgresProductRepository};

/// Shared, type-erased product repository handed to the HTTP layer.
pub type ProductStore =
    Arc<dyn Repository<Entity = Product, Id = i64, Create = CreateProduct>>;

/// Owns the product store and, for PostgreSQL, the pool behind it.
///
/// Opened once at startup and closed explicitly at shutdown.
#[derive(Debug, Clone)]
pub struct StoreHandle {
    products: ProductStore,
    pool: Option<DatabasePool>,
}

impl StoreHandle {
    /// Open the store selected by `config.provider`.
    pub async fn open(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            StoreProvider::Postgres => {
                info!("Initializing PostgreSQL product store");
                let pool = DatabasePool::connect(config).await?;
                if config.run_migrations {
                    pool.migrate().await?;
                }
                Ok(Self {
                    products: Arc::new(PostgresProductRepository::new(pool.clone())),
                    pool: Some(pool),
                })
            }
            StoreProvider::Memory => {
                info!("Initializing in-memory product store");
                Ok(Self::from_store(Arc::new(MemoryProductRepository::new())))
            }
        }
    }

    /// Wrap an existing store (used by tests).
    pub fn from_store(products: ProductStore) -> Self {
        Self {
            products,
            pool: None,
        }
    }

    /// The product repository.
    pub fn products(&self) -> ProductStore {
        Arc::clone(&self.products)
    }

    /// The PostgreSQL pool, when the store is backed by one.
    pub fn pool(&self) -> Option<&DatabasePool> {
        self.pool.as_ref()
    }

    /// Release the store's connections.
    pub async fn close(&self) {
        if let Some(pool) = &self.pool {
            pool.close().await;
        }
    }
}
