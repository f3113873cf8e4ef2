//! Error types for the marketplace server

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Missing required field, malformed identifier, unreadable body.
    #[error("{0}")]
    ClientInput(String),

    #[error("{0}")]
    NotFound(String),

    /// Uniqueness violation on insert.
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("{0}")]
    KeyValue(#[from] sled::Error),

    #[error("{0}")]
    Internal(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    pub fn status(&self) -> StatusCode {
        match self {
            Error::ClientInput(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Conflict(_) => StatusCode::CONFLICT,
            Error::Database(_) | Error::KeyValue(_) | Error::Internal(_) | Error::Other(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Category reported in the `error` field of the envelope.
    pub fn category(&self) -> &'static str {
        match self {
            Error::ClientInput(_) => "Bad Request",
            Error::NotFound(_) => "Not Found",
            Error::Conflict(_) => "Conflict",
            Error::Database(_) => "Database error occurred",
            Error::KeyValue(_) => "Key-value store error",
            Error::Internal(_) | Error::Other(_) => "Internal server error",
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            Error::Database(e) => tracing::error!(error = %e, "Database error"),
            Error::KeyValue(e) => tracing::error!(error = %e, "Key-value store error"),
            Error::Internal(_) | Error::Other(_) => {
                tracing::error!(error = %self, "Unexpected error")
            }
            _ => tracing::info!(status = status.as_u16(), message = %self, "Request rejected"),
        }

        let body = Json(json!({
            "error": self.category(),
            "message": self.to_string(),
        }));

        let mut response = (status, body).into_response();

        // IntoResponse has no request context, so errors always carry the
        // wildcard origin regardless of which route produced them.
        response.headers_mut().insert(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        );

        response
    }
}
