//! Root visit counter, health check and fallback

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

use crate::{state::AppState, Result};

pub const GREETING: &str = "Hello from the surplus marketplace!";

/// `GET /` - count the visit and greet
pub async fn root(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let visit_count = state.visit_counter.increment().await?;
    crate::metrics::VISITS_TOTAL.inc();
    tracing::debug!(visit_count, "Visit recorded");

    Ok(Json(json!({
        "message": GREETING,
        "visit_count": visit_count,
    })))
}

pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database = match &state.db_pool {
        None => "not_configured",
        Some(pool) => match sqlx::query("SELECT 1").execute(pool).await {
            Ok(_) => "ok",
            Err(e) => {
                tracing::warn!(error = %e, "Health check database ping failed");
                "unavailable"
            }
        },
    };

    let status = if database == "unavailable" {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    };

    (
        status,
        Json(json!({
            "status": if status == StatusCode::OK { "ok" } else { "degraded" },
            "service": "surplus",
            "version": env!("CARGO_PKG_VERSION"),
            "database": database,
        })),
    )
}

/// Any unmatched path
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "message": "Not Found" })))
}
