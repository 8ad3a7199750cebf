//! Typed path parameter helpers.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use catalog_core::error::AppError;

/// Message returned when no product matches the requested id.
pub const PRODUCT_NOT_FOUND: &str = "Product not found";

/// Product id taken from the `{id}` path segment.
///
/// A segment that is not an `i64` cannot name a stored product, so it is
/// rejected as 404 rather than 400. Routes that must answer 400 for a
/// malformed id run the validation middleware first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductId(pub i64);

impl<S> FromRequestParts<S> for ProductId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::not_found(PRODUCT_NOT_FOUND))?;
        parse_id(&raw).map(Self)
    }
}

/// Parses a product id from a path segment.
pub fn parse_id(s: &str) -> Result<i64, AppError> {
    s.parse::<i64>()
        .map_err(|_| AppError::not_found(PRODUCT_NOT_FOUND))
}
