//! Application wiring: database pool, storage backend, router.

pub mod routes;
pub mod server;

use crate::auth::AuthState;
use crate::state::{AppState, UploadLimits};
use anyhow::Context;
use axum::Router;
use mobilia_core::Config;
use mobilia_db::CategoryRepository;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;

const DB_MAX_CONNECTIONS: u32 = 20;
const DB_ACQUIRE_TIMEOUT_SECS: u64 = 30;

/// Build the application state and router from configuration.
pub async fn initialize_app(config: Config) -> Result<(Arc<AppState>, Router), anyhow::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(DB_MAX_CONNECTIONS)
        .acquire_timeout(Duration::from_secs(DB_ACQUIRE_TIMEOUT_SECS))
        .connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    let storage = mobilia_storage::create_storage(&config)
        .await
        .context("Failed to initialize storage backend")?;

    tracing::info!(
        backend = %storage.backend_type(),
        "Storage backend initialized"
    );

    let state = Arc::new(AppState {
        storage,
        categories: Arc::new(CategoryRepository::new(pool)),
        limits: UploadLimits::from_config(&config),
    });

    let auth_state = Arc::new(AuthState::new(&config.session_jwt_secret));

    let router = routes::build_router(
        state.clone(),
        auth_state,
        &config.cors_origins,
        config.max_body_bytes(),
    )?;

    Ok((state, router))
}
