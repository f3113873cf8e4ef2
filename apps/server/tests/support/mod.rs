pub mod stores;

use anyhow::Context as _;
use axum::{
    body::{Body, Bytes},
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use std::sync::Arc;
use surplus::{api::create_router, db::SledVisitCounter, AppState, Config};
use tower::ServiceExt as _;

pub use postgres::PgTestApp;
pub use stores::{restaurant, InMemoryCustomerStore, InMemoryRestaurantStore};

pub struct TestApp {
    pub router: Router,
    pub restaurants: Arc<InMemoryRestaurantStore>,
    pub customers: Arc<InMemoryCustomerStore>,
}

impl TestApp {
    pub fn new() -> anyhow::Result<Self> {
        Self::with_restaurants(InMemoryRestaurantStore::default())
    }

    pub fn with_restaurants(restaurants: InMemoryRestaurantStore) -> anyhow::Result<Self> {
        let restaurants = Arc::new(restaurants);
        let customers = Arc::new(InMemoryCustomerStore::default());
        let visits = SledVisitCounter::temporary().context("open temporary visit counter")?;

        let state = AppState::from_stores(
            Config::default(),
            restaurants.clone(),
            customers.clone(),
            Arc::new(visits),
        );

        Ok(Self {
            router: create_router(state),
            restaurants,
            customers,
        })
    }

    pub async fn request(
        &self,
        method: Method,
        path_and_query: &str,
        body: Option<Bytes>,
    ) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
        send(&self.router, method, path_and_query, body).await
    }

    /// Issue a request and decode the response body as JSON.
    pub async fn request_json(
        &self,
        method: Method,
        path_and_query: &str,
        body: Option<Value>,
    ) -> anyhow::Result<(StatusCode, HeaderMap, Value)> {
        send_json(&self.router, method, path_and_query, body).await
    }
}

pub async fn send(
    router: &Router,
    method: Method,
    path_and_query: &str,
    body: Option<Bytes>,
) -> anyhow::Result<(StatusCode, HeaderMap, Bytes)> {
    let request = Request::builder()
        .method(method)
        .uri(path_and_query)
        .header("content-type", "application/json")
        .body(match body {
            Some(bytes) => Body::from(bytes),
            None => Body::empty(),
        })
        .context("build request")?;

    let response = router
        .clone()
        .oneshot(request)
        .await
        .context("dispatch request")?;

    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .context("read response body")?;

    Ok((status, headers, body))
}

pub async fn send_json(
    router: &Router,
    method: Method,
    path_and_query: &str,
    body: Option<Value>,
) -> anyhow::Result<(StatusCode, HeaderMap, Value)> {
    let body = body
        .map(|v| serde_json::to_vec(&v).map(Bytes::from))
        .transpose()
        .context("encode request body")?;
    let (status, headers, bytes) = send(router, method, path_and_query, body).await?;
    let json = serde_json::from_slice(&bytes)
        .with_context(|| format!("decode response body: {}", String::from_utf8_lossy(&bytes)))?;
    Ok((status, headers, json))
}

pub fn assert_status(actual: StatusCode, expected: StatusCode, context: &str) {
    assert_eq!(actual, expected, "unexpected status for {context}");
}

/// Assert the `{error, message}` envelope.
pub fn assert_error(body: &Value, category: &str, message: &str) {
    assert_eq!(body["error"], category, "error category in {body}");
    assert_eq!(body["message"], message, "error message in {body}");
}

pub fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
