//! Product CRUD handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::info;

use catalog_core::error::AppError;
use catalog_core::result::AppResult;
use catalog_entity::product::{CreateProduct, Product, ProductSummary, UpdateProduct};

use crate::dto::request::{CreateProductRequest, UpdateProductRequest};
use crate::dto::response::DataResponse;
use crate::extractors::path::PRODUCT_NOT_FOUND;
use crate::extractors::{ProductId, ValidatedJson};
use crate::state::AppState;

/// Payload returned by a successful delete.
pub const PRODUCT_DELETED: &str = "Product deleted";

/// GET /api/products
pub async fn list_products(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ProductSummary>>>> {
    let products = state.products.find_all().await?;
    let summaries = products.into_iter().map(ProductSummary::from).collect();
    Ok(Json(DataResponse::new(summaries)))
}

/// GET /api/products/{id}
pub async fn get_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> AppResult<Json<DataResponse<Product>>> {
    let product = find_product(&state, id).await?;
    Ok(Json(DataResponse::new(product)))
}

/// POST /api/products
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(req): ValidatedJson<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Product>>)> {
    let input = CreateProduct::from(req);
    let product = state.products.create(&input).await?;
    info!(id = product.id, name = %product.name, "Product created");
    Ok((StatusCode::CREATED, Json(DataResponse::new(product))))
}

/// PUT /api/products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
    ValidatedJson(req): ValidatedJson<UpdateProductRequest>,
) -> AppResult<Json<DataResponse<Product>>> {
    let mut product = find_product(&state, id).await?;
    product.apply(&UpdateProduct::from(req));
    let product = persist(&state, &product).await?;
    info!(id, "Product updated");
    Ok(Json(DataResponse::new(product)))
}

/// PATCH /api/products/{id}
///
/// Flips `availability`; the request body is ignored.
pub async fn toggle_availability(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> AppResult<Json<DataResponse<Product>>> {
    let mut product = find_product(&state, id).await?;
    let availability = product.toggle_availability();
    let product = persist(&state, &product).await?;
    info!(id, availability, "Product availability toggled");
    Ok(Json(DataResponse::new(product)))
}

/// DELETE /api/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    ProductId(id): ProductId,
) -> AppResult<Json<DataResponse<&'static str>>> {
    find_product(&state, id).await?;
    if !state.products.delete(id).await? {
        return Err(AppError::not_found(PRODUCT_NOT_FOUND));
    }
    info!(id, "Product deleted");
    Ok(Json(DataResponse::new(PRODUCT_DELETED)))
}

async fn find_product(state: &AppState, id: i64) -> AppResult<Product> {
    state
        .products
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(PRODUCT_NOT_FOUND))
}

// The row can vanish between lookup and write under a concurrent delete.
async fn persist(state: &AppState, product: &Product) -> AppResult<Product> {
    state
        .products
        .update(product)
        .await?
        .ok_or_else(|| AppError::not_found(PRODUCT_NOT_FOUND))
}
