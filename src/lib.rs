pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod infra;

use app::seed_if_empty;
use axum::routing::get;
use axum::Router;
use config::ServerConfig;
use error::AppError;
use infra::{init_db, DbPool};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Install the log backend. `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Already installed (tests, embedding) is fine.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

pub fn router(pool: Arc<DbPool>) -> Router {
    Router::new()
        .route("/api/jokes", get(api::jokes::list_jokes))
        .with_state(pool)
}

/// Open and seed the store. Must succeed before any request is served.
pub fn prepare_store(config: &ServerConfig) -> Result<DbPool, AppError> {
    log::info!("DB path: {:?}", config.db_path);
    let pool = init_db(&config.db_path)?;
    seed_if_empty(&pool)?;
    Ok(pool)
}

/// Serve until the listener fails. Expects [`init_logging`] to have run.
pub async fn run(config: ServerConfig) -> Result<(), AppError> {
    let pool = Arc::new(prepare_store(&config)?);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .map_err(|e| AppError::Server(format!("bind {}: {}", bind_addr, e)))?;
    log::info!("Listening on http://{}", bind_addr);

    axum::serve(listener, router(pool))
        .await
        .map_err(|e| AppError::Server(e.to_string()))
}
