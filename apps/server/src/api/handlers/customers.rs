//! Customer profile handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Extension, Json,
};

use crate::{
    api::extractors::JsonBody, models::Customer, request_context::RequestContext,
    state::AppState, Result,
};

/// `POST /customers`
pub async fn create_customer(
    State(state): State<AppState>,
    context: Option<Extension<RequestContext>>,
    JsonBody(body): JsonBody,
) -> Result<(StatusCode, Json<Customer>)> {
    let customer = state.customer_service.create(body).await?;
    tracing::info!(
        customer_id = customer.customer_id,
        request_id = context.as_ref().map(|c| c.request_id.as_str()).unwrap_or("-"),
        correlation_id = context.as_ref().map(|c| c.correlation_id()).unwrap_or("-"),
        "Customer profile created"
    );
    Ok((StatusCode::CREATED, Json(customer)))
}

/// `GET /customers/:customer_id`
pub async fn read_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<String>,
) -> Result<Json<Customer>> {
    let customer = state.customer_service.read(&customer_id).await?;
    Ok(Json(customer))
}

/// `PUT` and `PATCH /customers/:customer_id` - both apply a partial update
pub async fn update_customer(
    State(state): State<AppState>,
    context: Option<Extension<RequestContext>>,
    Path(customer_id): Path<String>,
    JsonBody(body): JsonBody,
) -> Result<Json<Customer>> {
    let customer = state.customer_service.update(&customer_id, body).await?;
    tracing::info!(
        customer_id = customer.customer_id,
        request_id = context.as_ref().map(|c| c.request_id.as_str()).unwrap_or("-"),
        correlation_id = context.as_ref().map(|c| c.correlation_id()).unwrap_or("-"),
        "Customer profile updated"
    );
    Ok(Json(customer))
}
