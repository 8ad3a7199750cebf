//! Route-level validation middleware.
//!
//! Attached per route with `from_fn_with_state(RouteValidator::new(..),
//! validate_request)`. The body is buffered, checked, and handed on
//! unchanged when every rule passes.

use std::collections::HashMap;

use axum::body::{Body, Bytes, to_bytes};
use axum::extract::{FromRequestParts, RawPathParams, Request, State};
use axum::middleware::Next;
use axum::response::Response;
use serde_json::Value;
use tracing::debug;

use catalog_core::error::AppError;

use crate::validation::RuleSet;

/// Middleware state: the route's rule set plus the body size cap.
#[derive(Debug, Clone, Copy)]
pub struct RouteValidator {
    rules: &'static RuleSet,
    body_limit: usize,
}

impl RouteValidator {
    /// Validate against `rules`, buffering at most `body_limit` bytes.
    pub fn new(rules: &'static RuleSet, body_limit: usize) -> Self {
        Self { rules, body_limit }
    }
}

/// Runs the route's rule set; responds 400 with every failure or calls `next`.
pub async fn validate_request(
    State(validator): State<RouteValidator>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let rules = validator.rules;
    let (mut parts, body) = request.into_parts();

    let params: HashMap<String, String> = if rules.reads_params() {
        let raw = RawPathParams::from_request_parts(&mut parts, &())
            .await
            .map_err(|e| AppError::internal(format!("Path parameters unavailable: {e}")))?;
        raw.iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    } else {
        HashMap::new()
    };

    let bytes = to_bytes(body, validator.body_limit)
        .await
        .map_err(|e| AppError::bad_request(format!("Failed to read request body: {e}")))?;
    let payload = if rules.reads_body() {
        parse_body(&bytes)?
    } else {
        Value::Null
    };

    let errors = rules.evaluate(&params, &payload);
    if !errors.is_empty() {
        debug!(
            rule_set = rules.name,
            failures = errors.len(),
            "Request failed validation"
        );
        return Err(AppError::validation(errors));
    }

    let request = Request::from_parts(parts, Body::from(bytes));
    Ok(next.run(request).await)
}

/// Parse a JSON body; an empty body reads as an empty object.
pub fn parse_body(bytes: &Bytes) -> Result<Value, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    serde_json::from_slice(bytes).map_err(|_| AppError::bad_request("Malformed JSON body"))
}
