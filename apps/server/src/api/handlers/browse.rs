//! Restaurant browse handler

use axum::{
    extract::{Query, State},
    Json,
};
use std::collections::HashMap;

use crate::{models::BrowseResponse, state::AppState, Result};

/// `GET /browse` - every query parameter is optional
pub async fn browse(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<BrowseResponse>> {
    let response = state.browse_service.browse(&params).await?;
    Ok(Json(response))
}
