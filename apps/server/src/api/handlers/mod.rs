//! Request handlers for API endpoints
//!
//! Handlers coordinate between routes and services, handling:
//! - Request extraction
//! - Service invocation
//! - Response formatting

pub mod browse;
pub mod customers;
pub mod metrics;
pub mod restaurants;
pub mod visits;
