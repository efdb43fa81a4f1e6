//! Route definitions
//!
//! Feed and search routes are mounted under /api/v1; health routes sit at
//! the root.

use axum::{routing::get, Router};

use crate::handlers::{feed, health, search};
use crate::state::AppState;

/// Create the main API router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(feed_routes()).merge(search_routes())
}

/// Feed routes
fn feed_routes() -> Router<AppState> {
    Router::new()
        .route("/feed/for-you", get(feed::for_you))
        .route("/feed/following", get(feed::following))
}

/// Search routes
fn search_routes() -> Router<AppState> {
    Router::new()
        .route("/search/posts", get(search::search_posts))
        .route("/search/users", get(search::search_users))
        .route("/search/collections", get(search::search_collections))
}
