//! PostgreSQL product repository.

use async_trait::async_trait;

use catalog_core::result::AppResult;
use catalog_core::traits::Repository;
use catalog_entity::product::{CreateProduct, Product};

use crate::connection::DatabasePool;

const INSERT_WITH_AVAILABILITY: &str = "INSERT INTO products (name, price, availability) \
     VALUES ($1, $2, $3) RETURNING id, name, price, availability, created_at, updated_at";

// Leaves `availability` out so the column default applies.
const INSERT_WITH_DEFAULT_AVAILABILITY: &str = "INSERT INTO products (name, price) \
     VALUES ($1, $2) RETURNING id, name, price, availability, created_at, updated_at";

/// Repository for product CRUD operations backed by the `products` table.
#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    db: DatabasePool,
}

impl PostgresProductRepository {
    /// Create a new product repository.
    pub fn new(db: DatabasePool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Repository for PostgresProductRepository {
    type Entity = Product;
    type Id = i64;
    type Create = CreateProduct;

    async fn find_all(&self) -> AppResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, availability, created_at, updated_at \
             FROM products ORDER BY id DESC",
        )
        .fetch_all(self.db.pool())
        .await?;
        Ok(products)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT id, name, price, availability, created_at, updated_at \
             FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(product)
    }

    async fn create(&self, input: &CreateProduct) -> AppResult<Product> {
        let query = match input.availability {
            Some(availability) => sqlx::query_as::<_, Product>(INSERT_WITH_AVAILABILITY)
                .bind(&input.name)
                .bind(input.price)
                .bind(availability),
            None => sqlx::query_as::<_, Product>(INSERT_WITH_DEFAULT_AVAILABILITY)
                .bind(&input.name)
                .bind(input.price),
        };
        Ok(query.fetch_one(self.db.pool()).await?)
    }

    async fn update(&self, product: &Product) -> AppResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "UPDATE products SET name = $2, price = $3, availability = $4, updated_at = NOW() \
             WHERE id = $1 RETURNING id, name, price, availability, created_at, updated_at",
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(product.price)
        .bind(product.availability)
        .fetch_optional(self.db.pool())
        .await?;
        Ok(product)
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(self.db.pool())
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> AppResult<bool> {
        let one = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.db.pool())
            .await?;
        Ok(one == 1)
    }
}
