//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod headlines;

pub use headlines::{get_headlines, post_summary};
