//! Chat-completion port trait
//!
//! Defines the interface for a model-serving backend.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A single message in a chat request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// The backend's reply to a chat request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatResponse {
    /// Model that produced the reply
    pub model: String,
    /// Text content of the assistant message
    pub content: String,
}

#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send one non-streaming chat request to `model`
    async fn chat(
        &self,
        model: &str,
        messages: Vec<ChatMessage>,
    ) -> Result<ChatResponse, ModelError>;
}
