//! Response DTOs.

use serde::{Deserialize, Serialize};

/// Success envelope: `{ "data": ... }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataResponse<T: Serialize> {
    /// Response payload.
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    /// Wrap a payload.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// GET /api greeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    /// Greeting text.
    pub msg: String,
}

/// GET /api/health body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `"ok"` or `"degraded"`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// `"up"` or `"down"`.
    pub store: String,
}
