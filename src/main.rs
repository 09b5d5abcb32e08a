// src/main.rs
use axum::{extract::Extension, middleware, Router};
use dotenv::dotenv;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::PathBuf;
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::{
    cors::{CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

// ============================================================================
// MODULE IMPORTS
// ============================================================================

mod candidats;
mod common;
mod logging_middleware;

use candidats::repository::SqliteCandidatStore;
use candidats::store::{CandidatStore, InMemoryCandidatStore};
use common::{AppConfig, AppState, HeaderUtil, StoreBackend};

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::from_env();
    let alerts = HeaderUtil::new(&config.app_name)?;
    info!(app = %alerts.app_name(), backend = ?config.store_backend, "Configuration loaded");

    // ========================================================================
    // STORE SETUP
    // ========================================================================

    let exposed_headers = std::iter::once(axum::http::header::LOCATION)
        .chain(alerts.header_names())
        .collect::<Vec<_>>();

    let store: Arc<dyn CandidatStore> = match config.store_backend {
        StoreBackend::Sqlite => Arc::new(SqliteCandidatStore::new(connect_sqlite(&config).await?)),
        StoreBackend::Memory => Arc::new(InMemoryCandidatStore::new()),
    };

    let shared = Arc::new(AppState::new(store, alerts));

    // ========================================================================
    // ROUTER COMPOSITION
    // ========================================================================

    let origins: Vec<axum::http::HeaderValue> = config
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    let app = Router::new()
        .merge(candidats::candidats_routes())
        .layer(middleware::from_fn(logging_middleware::log_request_response))
        .layer(Extension(shared))
        .layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::PUT,
                    axum::http::Method::DELETE,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([axum::http::header::CONTENT_TYPE])
                // Browsers only expose the alert headers to client code when listed
                .expose_headers(ExposeHeaders::list(exposed_headers)),
        )
        .layer(TraceLayer::new_for_http());

    // ========================================================================
    // SERVER STARTUP
    // ========================================================================

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Open the SQLite pool, creating the database file and schema when missing
async fn connect_sqlite(config: &AppConfig) -> anyhow::Result<sqlx::SqlitePool> {
    if let Some(path_part) = config.database_url.strip_prefix("sqlite://") {
        let path_without_params = path_part.split('?').next().unwrap_or("");
        if !path_without_params.is_empty() && !path_without_params.starts_with(':') {
            let db_path = PathBuf::from(path_without_params);
            if let Some(parent) = db_path.parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
        }
    }

    let connect_options =
        SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .connect_with(connect_options)
        .await?;

    common::migrations::run_migrations(&pool, config.reset_db).await?;

    Ok(pool)
}
