//! # catalog-api
//!
//! HTTP API layer built on Axum. Provides the product routes, the
//! per-route validation middleware and its rule sets, request/response
//! DTOs, custom extractors, and the server entry point.

pub mod app;
pub mod dto;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;
pub mod validation;

pub use app::{build_app, serve};
pub use state::AppState;
