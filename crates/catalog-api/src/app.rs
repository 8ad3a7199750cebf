//! Application builder: wires router, layers, and state into an Axum app.

use std::future::{Future, IntoFuture};
use std::time::Duration;

use axum::Router;
use tokio::sync::watch;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use catalog_core::config::{AppConfig, CorsConfig};
use catalog_core::error::{AppError, ErrorKind};
use catalog_database::StoreHandle;

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and layers.
pub fn build_app(state: AppState, cors_config: &CorsConfig) -> Router {
    build_router(state)
        .layer(build_compression_layer())
        .layer(build_cors_layer(cors_config))
        .layer(TraceLayer::new_for_http())
}

/// Runs the HTTP server until `shutdown` resolves.
///
/// In-flight requests get `server.shutdown_grace_seconds` to finish after
/// the signal; the store is closed once the server has stopped.
pub async fn serve<F>(config: AppConfig, store: StoreHandle, shutdown: F) -> Result<(), AppError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);
    let cors = config.server.cors.clone();

    let state = AppState::new(config, store.products());
    let app = build_app(state, &cors);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Internal, format!("Failed to bind {addr}"), e)
        })?;

    info!("Catalog server listening on {}", addr);

    let (signal_tx, mut signal_rx) = watch::channel(false);
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            info!("Shutdown signal received, starting graceful shutdown...");
            let _ = signal_tx.send(true);
        })
        .into_future();
    tokio::pin!(server);

    let deadline = async move {
        if signal_rx.wait_for(|fired| *fired).await.is_err() {
            std::future::pending::<()>().await;
        }
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        result = &mut server => {
            result?;
        }
        () = deadline => {
            warn!(
                grace_seconds = grace.as_secs(),
                "Graceful shutdown timed out, dropping open connections"
            );
        }
    }

    store.close().await;
    info!("Catalog server shut down gracefully");
    Ok(())
}
