//! Route definitions for the Catalog HTTP API.
//!
//! All routes are mounted under `/api`. Product routes that declare
//! field rules get the validation middleware attached to the individual
//! method handler, so PATCH on the same path stays unvalidated.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    handler::Handler,
    middleware as axum_middleware,
    routing::get,
};

use crate::handlers;
use crate::middleware::{self, RouteValidator, validate_request};
use crate::state::AppState;
use crate::validation::rule_sets::{CREATE_PRODUCT, DELETE_PRODUCT, GET_PRODUCT, UPDATE_PRODUCT};

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.server.body_limit_bytes;

    let api_routes = Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health))
        .nest("/products", product_routes(body_limit));

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Product CRUD endpoints
fn product_routes(body_limit: usize) -> Router<AppState> {
    use crate::handlers::product;

    Router::new()
        .route(
            "/",
            get(product::list_products).post(product::create_product.layer(
                axum_middleware::from_fn_with_state(
                    RouteValidator::new(&CREATE_PRODUCT, body_limit),
                    validate_request,
                ),
            )),
        )
        .route(
            "/{id}",
            get(product::get_product.layer(axum_middleware::from_fn_with_state(
                RouteValidator::new(&GET_PRODUCT, body_limit),
                validate_request,
            )))
            .put(product::update_product.layer(axum_middleware::from_fn_with_state(
                RouteValidator::new(&UPDATE_PRODUCT, body_limit),
                validate_request,
            )))
            .patch(product::toggle_availability)
            .delete(product::delete_product.layer(axum_middleware::from_fn_with_state(
                RouteValidator::new(&DELETE_PRODUCT, body_limit),
                validate_request,
            ))),
        )
}
