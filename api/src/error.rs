//! Unified error types for the Headlines API
//!
//! This module defines error types for each layer:
//! - `FetchError`: news feed transport errors
//! - `ParseError`: feed document errors (degraded to empty results by the fetcher)
//! - `ModelError`: chat-completion backend errors
//! - `AppError`: Application layer errors (wraps the above for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// News feed client errors
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Feed returned status {status} for {url}")]
    Status { status: u16, url: String },
}

/// Feed document errors
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Malformed XML: {0}")]
    Xml(String),
}

impl From<roxmltree::Error> for ParseError {
    fn from(e: roxmltree::Error) -> Self {
        ParseError::Xml(e.to_string())
    }
}

/// Chat-completion backend errors
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Model backend unavailable: {0}")]
    Unavailable(#[from] reqwest::Error),

    #[error("Model API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Feed error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Fetch(e) => {
                tracing::error!("Feed error: {}", e);
                (StatusCode::BAD_GATEWAY, "News feed unavailable", None)
            }
            AppError::Model(e) => {
                tracing::error!("Model error: {}", e);
                match e {
                    ModelError::Unavailable(_) => (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "Summarization backend unavailable",
                        None,
                    ),
                    ModelError::Api { message, .. } => (
                        StatusCode::BAD_GATEWAY,
                        "Summarization backend error",
                        Some(message.clone()),
                    ),
                    ModelError::Deserialization(_) => (
                        StatusCode::BAD_GATEWAY,
                        "Summarization backend error",
                        None,
                    ),
                }
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
