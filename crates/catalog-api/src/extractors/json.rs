//! JSON body extractor that deserializes and validates a DTO.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use serde::de::DeserializeOwned;
use validator::Validate;

use catalog_core::error::AppError;

use crate::middleware::validation::parse_body;

/// Deserialized and `validator`-checked request body.
///
/// An empty body reads as `{}`. Malformed JSON and type mismatches are
/// 400 `BadRequest`; failed `Validate` checks are 400 `Validation`.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(format!("Failed to read request body: {e}")))?;
        let value = parse_body(&bytes)?;
        let payload: T = serde_json::from_value(value)
            .map_err(|e| AppError::bad_request(format!("Invalid request body: {e}")))?;
        payload.validate()?;
        Ok(Self(payload))
    }
}
