//! Ollama chat API client implementation

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::domain::ports::{ChatClient, ChatMessage, ChatResponse};
use crate::error::ModelError;

/// Implementation of the chat port over Ollama's `/api/chat`
pub struct OllamaClient {
    http: Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/api{}", self.base_url, path)
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ModelError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| ModelError::Deserialization(e.to_string()))
        } else {
            let body = response.text().await.unwrap_or_default();
            // Ollama reports failures as {"error": "..."}
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or(body);
            Err(ModelError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Request types for the Ollama API
#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

/// Response types from the Ollama API
#[derive(Deserialize)]
struct ChatResponseBody {
    model: String,
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

#[async_trait]
impl ChatClient for OllamaClient {
    async fn chat(
        &self,
        model: &str,
        messages: Vec<ChatMessage>,
    ) -> Result<ChatResponse, ModelError> {
        tracing::debug!(model, messages = messages.len(), "Sending chat request");

        let resp = self
            .http
            .post(self.api_url("/chat"))
            .json(&ChatRequest {
                model,
                messages: &messages,
                stream: false,
            })
            .send()
            .await?;

        let body: ChatResponseBody = self.handle_response(resp).await?;

        Ok(ChatResponse {
            model: body.model,
            content: body.message.content,
        })
    }
}
