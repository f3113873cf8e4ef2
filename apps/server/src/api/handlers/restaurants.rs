//! Restaurant detail and homepage handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

use crate::{services::HomepageSections, state::AppState, Result};

/// `GET /restaurants[/:restaurant_id[/:branch_id]]`
///
/// Each identifier comes from the path when present, otherwise from the query string.
pub async fn detail(
    State(state): State<AppState>,
    path: Option<Path<HashMap<String, String>>>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<JsonValue>> {
    let path = path.map(|Path(params)| params).unwrap_or_default();
    let lookup = |name: &str| {
        path.get(name)
            .or_else(|| query.get(name))
            .map(String::as_str)
    };

    let restaurant = state
        .restaurant_service
        .detail(lookup("restaurant_id"), lookup("branch_id"))
        .await?;
    Ok(Json(restaurant))
}

/// `GET /homepage`
pub async fn homepage(State(state): State<AppState>) -> Result<Json<HomepageSections>> {
    let sections = state.restaurant_service.homepage().await?;
    Ok(Json(sections))
}
