//! Catalog Server: product catalog REST API.
//!
//! Parses the command line, loads configuration, initializes logging,
//! and runs either the HTTP server or the migration command.

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, fmt};

use catalog_core::config::{AppConfig, StoreProvider};
use catalog_core::error::AppError;
use catalog_database::StoreHandle;
use catalog_database::connection::DatabasePool;

/// Catalog: product catalog REST API
#[derive(Debug, Parser)]
#[command(name = "catalog-server", version, about, long_about = None)]
struct Cli {
    /// Base configuration file, without extension
    #[arg(short, long, default_value = "config/default")]
    config: String,

    /// Environment overlay loaded from `config/{env}`
    #[arg(short, long, env = "CATALOG_ENV", default_value = "development")]
    env: String,

    /// Subcommand to execute (defaults to `serve`)
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Top-level commands
#[derive(Debug, Clone, Copy, Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Apply pending database migrations and exit
    Migrate,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match AppConfig::load(&cli.config, &cli.env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(config = %cli.config, env = %cli.env, "Configuration loaded");

    let result = match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => run(config).await,
        Commands::Migrate => migrate(config).await,
    };

    if let Err(e) = result {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Open the configured store and serve HTTP until a shutdown signal.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Catalog v{}", env!("CARGO_PKG_VERSION"));

    let store = StoreHandle::open(&config.database).await?;
    catalog_api::serve(config, store, shutdown_signal()).await
}

/// Apply migrations against the configured PostgreSQL database.
async fn migrate(config: AppConfig) -> Result<(), AppError> {
    if config.database.provider != StoreProvider::Postgres {
        return Err(AppError::configuration(
            "The migrate command requires database.provider = \"postgres\"",
        ));
    }

    let pool = DatabasePool::connect(&config.database).await?;
    let result = pool.migrate().await;
    pool.close().await;
    result
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
