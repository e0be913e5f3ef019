//! News feed port trait
//!
//! Defines the interface for searching an upstream news feed.

use async_trait::async_trait;

use crate::domain::entities::Headline;
use crate::error::FetchError;

/// Keyword search over a news source
#[async_trait]
pub trait NewsFeed: Send + Sync {
    /// Return up to `limit` headlines for `keyword`, in feed order.
    ///
    /// A feed that can't be parsed yields fewer (possibly zero) headlines
    /// rather than an error.
    async fn search(&self, keyword: &str, limit: usize) -> Result<Vec<Headline>, FetchError>;
}
