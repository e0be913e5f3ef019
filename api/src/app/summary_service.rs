//! Summary service
//!
//! Turns a list of headline titles into one prompt and asks the chat
//! backend for a thematic summary.

use std::sync::Arc;

use crate::domain::ports::{ChatClient, ChatMessage};
use crate::error::ModelError;

/// Returned instead of calling the model when there is nothing to summarize
pub const NO_HEADLINES: &str = "No headlines found.";

/// Build the analyst prompt for a non-empty list of titles
pub fn build_prompt<S: AsRef<str>>(headlines: &[S]) -> String {
    let joined = headlines
        .iter()
        .map(|h| format!("- {}", h.as_ref()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "You are a news analyst.\n\n\
         Given the following headlines, produce a concise summary in 4–6 bullet points.\n\
         Focus on key themes and major developments.\n\n\
         Headlines:\n\
         {}\n",
        joined
    )
}

/// Service for summarizing headlines
pub struct SummaryService<CC>
where
    CC: ChatClient,
{
    chat: Arc<CC>,
    default_model: String,
}

impl<CC> SummaryService<CC>
where
    CC: ChatClient,
{
    pub fn new(chat: Arc<CC>, default_model: String) -> Self {
        Self {
            chat,
            default_model,
        }
    }

    /// Summarize with the configured default model
    pub async fn summarize_headlines<S: AsRef<str>>(
        &self,
        headlines: &[S],
    ) -> Result<String, ModelError> {
        self.summarize_headlines_with_model(headlines, &self.default_model)
            .await
    }

    /// Summarize with an explicit model.
    ///
    /// Makes exactly one chat request, or none for an empty list. The model's
    /// reply is returned as-is.
    pub async fn summarize_headlines_with_model<S: AsRef<str>>(
        &self,
        headlines: &[S],
        model: &str,
    ) -> Result<String, ModelError> {
        if headlines.is_empty() {
            return Ok(NO_HEADLINES.to_string());
        }

        let prompt = build_prompt(headlines);
        let response = self.chat.chat(model, vec![ChatMessage::user(prompt)]).await?;

        tracing::info!(
            model = %response.model,
            headlines = headlines.len(),
            "Summarized headlines"
        );
        Ok(response.content)
    }
}
