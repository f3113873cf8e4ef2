//! Layer factories for middleware

use tower_http::compression::CompressionLayer;

/// Compression middleware
pub fn compression() -> CompressionLayer {
    CompressionLayer::new()
}
