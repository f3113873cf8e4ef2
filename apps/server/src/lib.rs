//! Surplus marketplace API server
//!
//! HTTP service backing a food-surplus marketplace:
//! - Restaurant browse with filtering, sorting and radius search
//! - Restaurant detail and homepage sections
//! - Customer profile create/read/update
//! - Visit counter backed by an embedded key-value store

#![allow(
    clippy::large_enum_variant,      // Error variants carry driver errors unboxed
)]

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod request_context;
pub mod services;
pub mod state;

pub use config::Config;
pub use error::{Error, Result};
pub use state::AppState;
