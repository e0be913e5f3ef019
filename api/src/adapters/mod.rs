//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod google_news;
pub mod ollama;

pub use google_news::GoogleNewsClient;
pub use ollama::OllamaClient;
