//! Error handling and custom error types
//!
//! Provides unified error handling across the application using thiserror,
//! plus the mapping from errors to JSON HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::models::ErrorResponse;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    BadRequest(String),

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("service not configured: {0}")]
    Config(String),

    #[error("upstream error (status {status}): {body}")]
    Upstream { status: u16, body: String },

    #[error("unexpected upstream response format: {0}")]
    Format(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        tracing::error!("request failed: {}", self);

        let (status, body) = match self {
            Error::BadRequest(message) => (StatusCode::BAD_REQUEST, ErrorResponse::new(message)),
            Error::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorResponse::new("Method not allowed"),
            ),
            // Never leaks which credential source was missing.
            Error::Config(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("Service not configured"),
            ),
            Error::Upstream { status, body } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
                ErrorResponse::new("Failed to get response from AI service").with_details(body),
            ),
            Error::Format(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("Unexpected response format from AI service"),
            ),
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorResponse::new("Internal server error").with_message(other.to_string()),
            ),
        };

        (status, Json(body)).into_response()
    }
}
