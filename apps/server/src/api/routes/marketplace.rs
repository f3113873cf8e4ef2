//! Marketplace API routes
//!
//! Browse and customer routes carry the fixed CORS header set; detail and
//! homepage routes do not.

use crate::api::handlers::{browse, customers, restaurants};
use crate::api::middleware::cors::{cors_middleware, BROWSE_METHODS, CUSTOMER_METHODS};
use crate::state::AppState;
use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

pub fn browse_routes() -> Router<AppState> {
    Router::new()
        .route("/browse", get(browse::browse))
        .layer(from_fn_with_state(BROWSE_METHODS, cors_middleware))
}

pub fn restaurant_routes() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(restaurants::detail))
        .route("/restaurants/:restaurant_id", get(restaurants::detail))
        .route(
            "/restaurants/:restaurant_id/:branch_id",
            get(restaurants::detail),
        )
        .route("/homepage", get(restaurants::homepage))
}

pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/customers", post(customers::create_customer))
        .route(
            "/customers/:customer_id",
            get(customers::read_customer)
                .put(customers::update_customer)
                .patch(customers::update_customer),
        )
        .layer(from_fn_with_state(CUSTOMER_METHODS, cors_middleware))
}
