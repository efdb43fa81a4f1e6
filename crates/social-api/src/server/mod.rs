//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::Router;
use social_common::{AppConfig, AppError};
use social_db::{
    create_pool, run_migrations, DatabaseConfig, PgCollectionRepository, PgFollowRepository,
    PgPostRepository, PgUserRepository,
};
use social_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Directory holding the SQL migrations, relative to the working directory
const DEFAULT_MIGRATIONS_DIR: &str = "migrations";

/// Build the complete Axum application with all routes and middleware
///
/// # Errors
/// Returns `AppError::Config` if the rate limiter cannot be configured
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;
    let health = apply_middleware(health_routes());

    Ok(api.merge(health).with_state(state))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = DatabaseConfig::new(
        config.database.url.clone(),
        config.database.max_connections,
        config.database.min_connections,
    );
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create repositories
    let post_repo = Arc::new(PgPostRepository::new(pool.clone()));
    let collection_repo = Arc::new(PgCollectionRepository::new(pool.clone()));
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let follow_repo = Arc::new(PgFollowRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .post_repo(post_repo)
        .collection_repo(collection_repo)
        .user_repo(user_repo)
        .follow_repo(follow_repo)
        .pagination(config.pagination.settings())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config, Some(pool)))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let address = config.api.address();
    let addr: SocketAddr = address
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address {address}: {e}")))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Apply migrations
    if let Some(pool) = state.pool() {
        let dir = std::env::var("MIGRATIONS_DIR")
            .unwrap_or_else(|_| DEFAULT_MIGRATIONS_DIR.to_string());
        info!(dir = %dir, "Applying migrations");
        run_migrations(pool, Path::new(&dir))
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
    }

    // Build application
    let app = create_app(state)?;

    // Run server
    run_server(app, addr).await
}
