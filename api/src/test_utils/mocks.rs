//! Mock implementations of port traits
//!
//! In-memory implementations that can be configured for testing.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::entities::Headline;
use crate::domain::ports::{ChatClient, ChatMessage, ChatResponse, NewsFeed};
use crate::error::{FetchError, ModelError};

// ============================================================================
// Mock News Feed
// ============================================================================

#[derive(Default)]
pub struct MockNewsFeed {
    headlines: Vec<Headline>,
    should_fail: bool,
    ignore_limit: bool,
    searches: Arc<RwLock<Vec<(String, usize)>>>,
}

impl MockNewsFeed {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// Serve these headlines for every keyword
    pub fn with_headlines(mut self, headlines: Vec<Headline>) -> Self {
        self.headlines = headlines;
        self
    }

    /// Return every configured headline regardless of the requested limit
    pub fn ignoring_limit(mut self) -> Self {
        self.ignore_limit = true;
        self
    }

    /// (keyword, limit) for each search, in call order
    pub fn searches(&self) -> Vec<(String, usize)> {
        self.searches.read().unwrap().clone()
    }
}

#[async_trait]
impl NewsFeed for MockNewsFeed {
    async fn search(&self, keyword: &str, limit: usize) -> Result<Vec<Headline>, FetchError> {
        self.searches
            .write()
            .unwrap()
            .push((keyword.to_string(), limit));

        if self.should_fail {
            return Err(FetchError::Status {
                status: 503,
                url: format!("mock://search?q={}", keyword),
            });
        }

        let take = if self.ignore_limit {
            self.headlines.len()
        } else {
            limit
        };
        Ok(self.headlines.iter().take(take).cloned().collect())
    }
}

// ============================================================================
// Mock Chat Client
// ============================================================================

pub struct MockChatClient {
    reply: String,
    should_fail: bool,
    requests: Arc<RwLock<Vec<(String, Vec<ChatMessage>)>>>,
}

impl Default for MockChatClient {
    fn default() -> Self {
        Self {
            reply: "• **Mock**: summary".to_string(),
            should_fail: false,
            requests: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

impl MockChatClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn with_reply(mut self, reply: &str) -> Self {
        self.reply = reply.to_string();
        self
    }

    /// (model, messages) for each chat request, in call order
    pub fn requests(&self) -> Vec<(String, Vec<ChatMessage>)> {
        self.requests.read().unwrap().clone()
    }
}

#[async_trait]
impl ChatClient for MockChatClient {
    async fn chat(
        &self,
        model: &str,
        messages: Vec<ChatMessage>,
    ) -> Result<ChatResponse, ModelError> {
        self.requests
            .write()
            .unwrap()
            .push((model.to_string(), messages));

        if self.should_fail {
            return Err(ModelError::Api {
                status: 500,
                message: "mock backend failure".to_string(),
            });
        }

        Ok(ChatResponse {
            model: model.to_string(),
            content: self.reply.clone(),
        })
    }
}
