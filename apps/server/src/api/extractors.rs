//! Custom Axum extractors.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::Value as JsonValue;

use crate::Error;

/// Optional JSON request body.
///
/// An empty body extracts as `None` so handlers can report a missing body
/// themselves. Unreadable or malformed bodies are rejected with the standard
/// error envelope rather than axum's plain-text rejection.
pub struct JsonBody(pub Option<JsonValue>);

#[async_trait]
impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| Error::ClientInput(format!("Failed to read request body: {}", e)))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(None));
        }

        serde_json::from_slice(&bytes)
            .map(|value| Self(Some(value)))
            .map_err(|e| Error::ClientInput(format!("Invalid JSON body: {}", e)))
    }
}
