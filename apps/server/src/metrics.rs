//! Metrics collection for the marketplace API
//!
//! Prometheus metrics exposed on `GET /metrics`.

use lazy_static::lazy_static;
use prometheus::{
    register_histogram_vec, register_int_counter, register_int_counter_vec, register_int_gauge,
    register_int_gauge_vec, HistogramVec, IntCounter, IntCounterVec, IntGauge, IntGaugeVec,
};

lazy_static! {
    // HTTP Request Metrics

    /// Total HTTP requests by method, path, and status
    pub static ref HTTP_REQUESTS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "surplus_http_requests_total",
        "Total number of HTTP requests",
        &["method", "path", "status"]
    )
    .expect("Failed to register HTTP_REQUESTS_TOTAL");

    /// HTTP request duration in seconds
    pub static ref HTTP_REQUEST_DURATION_SECONDS: HistogramVec = register_histogram_vec!(
        "surplus_http_request_duration_seconds",
        "HTTP request duration in seconds",
        &["method", "path"],
        vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0]
    )
    .expect("Failed to register HTTP_REQUEST_DURATION_SECONDS");

    /// In-flight HTTP requests
    pub static ref HTTP_REQUESTS_IN_FLIGHT: IntGaugeVec = register_int_gauge_vec!(
        "surplus_http_requests_in_flight",
        "Number of HTTP requests currently being processed",
        &["method", "path"]
    )
    .expect("Failed to register HTTP_REQUESTS_IN_FLIGHT");

    // Marketplace Metrics

    /// Restaurants returned per browse request, after radius filtering
    pub static ref BROWSE_RESULTS: HistogramVec = register_histogram_vec!(
        "surplus_browse_results",
        "Number of restaurants returned by browse",
        &["radius"],
        vec![0.0, 1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0]
    )
    .expect("Failed to register BROWSE_RESULTS");

    /// Customer profile operations by outcome
    pub static ref CUSTOMER_OPERATIONS_TOTAL: IntCounterVec = register_int_counter_vec!(
        "surplus_customer_operations_total",
        "Total number of customer profile operations",
        &["operation", "status"]
    )
    .expect("Failed to register CUSTOMER_OPERATIONS_TOTAL");

    /// Visits recorded by the root endpoint
    pub static ref VISITS_TOTAL: IntCounter = register_int_counter!(
        "surplus_visits_total",
        "Total number of visits recorded since process start"
    )
    .expect("Failed to register VISITS_TOTAL");

    // Database Metrics

    /// Active database connections
    pub static ref DB_CONNECTIONS_ACTIVE: IntGauge = register_int_gauge!(
        "surplus_db_connections_active",
        "Number of active database connections"
    )
    .expect("Failed to register DB_CONNECTIONS_ACTIVE");

    /// Idle database connections
    pub static ref DB_CONNECTIONS_IDLE: IntGauge = register_int_gauge!(
        "surplus_db_connections_idle",
        "Number of idle database connections"
    )
    .expect("Failed to register DB_CONNECTIONS_IDLE");
}

/// Sanitize a request path for metric labels (replace ids, limit cardinality)
pub fn sanitize_path(path: &str) -> String {
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match segments.as_slice() {
        [] => "/".to_string(),
        ["restaurants", _, _] => "/restaurants/{restaurant_id}/{branch_id}".to_string(),
        ["restaurants", _] => "/restaurants/{restaurant_id}".to_string(),
        ["customers", _] => "/customers/{customer_id}".to_string(),
        [first] => format!("/{first}"),
        // Unknown deep paths would otherwise create one series each
        [first, ..] => format!("/{first}/..."),
    }
}
