//! Error response bodies shared by the API layer.

use serde::{Deserialize, Serialize};

/// Where a validated value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldLocation {
    /// JSON request body.
    Body,
    /// Route path parameter.
    Params,
}

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    /// Always `"field"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The offending value, absent when the field was missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    /// Human-readable message.
    pub msg: String,
    /// Field name.
    pub path: String,
    /// Where the field was read from.
    pub location: FieldLocation,
}

impl FieldError {
    /// Create a field error for `path` at `location`.
    pub fn new(
        path: impl Into<String>,
        location: FieldLocation,
        value: Option<serde_json::Value>,
        msg: impl Into<String>,
    ) -> Self {
        Self {
            kind: "field".to_string(),
            value,
            msg: msg.into(),
            path: path.into(),
            location,
        }
    }
}

/// Body of a 400 response produced by failed field checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldErrorsResponse {
    /// Every failed check, in evaluation order.
    pub errors: Vec<FieldError>,
}

/// Body of every other error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable message.
    pub error: String,
}
