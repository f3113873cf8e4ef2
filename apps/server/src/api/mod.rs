//! API layer - routes, handlers, and middleware

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod routes;

use crate::state::AppState;
use axum::{extract::DefaultBodyLimit, routing::get, Router};

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    let max_body_size = state.config.server.max_request_body_size;

    Router::new()
        // Health check
        .route("/health", get(handlers::visits::health_check))
        // Visit counter
        .route("/", get(handlers::visits::root))
        .merge(routes::metrics::metrics_routes())
        .merge(routes::marketplace::browse_routes())
        .merge(routes::marketplace::restaurant_routes())
        .merge(routes::marketplace::customer_routes())
        .fallback(handlers::visits::not_found)
        .with_state(state)
        // Add middleware (applied in reverse order)
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(axum::middleware::from_fn(middleware::metrics_middleware))
        .layer(middleware::compression())
        .layer(DefaultBodyLimit::max(max_body_size))
}
