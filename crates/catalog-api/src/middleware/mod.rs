//! Axum middleware stack.

pub mod compression;
pub mod cors;
pub mod logging;
pub mod validation;

pub use validation::{RouteValidator, validate_request};
