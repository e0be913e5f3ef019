//! Ollama adapter
//!
//! Chat completions against a local or remote Ollama server.

pub mod client;

pub use client::OllamaClient;
