//! Fixed CORS headers for the public API
//!
//! Browse and customer routes answer any origin with a fixed header set; only
//! the allowed methods differ per router.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

pub const ALLOWED_HEADERS: &str = "Content-Type,X-Amz-Date,Authorization,X-Api-Key,X-Amz-Security-Token";
pub const BROWSE_METHODS: &str = "GET,OPTIONS";
pub const CUSTOMER_METHODS: &str = "GET,POST,PUT,PATCH,OPTIONS";

/// Add the CORS header set to every response; answer preflight with 204.
pub async fn cors_middleware(
    State(methods): State<&'static str>,
    req: Request,
    next: Next,
) -> Response {
    let mut response = if req.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(req).await
    };

    apply_cors_headers(response.headers_mut(), methods);
    response
}

pub fn apply_cors_headers(headers: &mut HeaderMap, methods: &'static str) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(methods),
    );
}
