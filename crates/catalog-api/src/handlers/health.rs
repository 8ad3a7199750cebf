//! Root and health check handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::warn;

use crate::dto::response::{HealthResponse, RootResponse};
use crate::state::AppState;

/// GET /api
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        msg: "Desde API".to_string(),
    })
}

/// GET /api/health
///
/// 200 when the product store answers its health check, 503 otherwise.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let store_up = match state.products.health_check().await {
        Ok(up) => up,
        Err(e) => {
            warn!(error = %e, "Product store health check failed");
            false
        }
    };

    let (status, label, store) = if store_up {
        (StatusCode::OK, "ok", "up")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded", "down")
    };

    (
        status,
        Json(HealthResponse {
            status: label.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            store: store.to_string(),
        }),
    )
}
