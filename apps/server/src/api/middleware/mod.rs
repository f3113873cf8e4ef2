//! Middleware stack for the API

pub mod cors;
pub mod layers;
pub mod metrics;
pub mod request_id;

pub use cors::cors_middleware;
pub use layers::compression;
pub use metrics::metrics_middleware;
pub use request_id::request_id_middleware;
