//! Per-request context injected by middleware.

#[derive(Debug, Clone)]
pub struct RequestContext {
    pub request_id: String,
    /// Correlation id supplied by the caller, when it differs from ours
    pub client_request_id: Option<String>,
}

impl RequestContext {
    /// Id to log against: the caller's correlation id when given, else ours.
    pub fn correlation_id(&self) -> &str {
        self.client_request_id.as_deref().unwrap_or(&self.request_id)
    }
}
