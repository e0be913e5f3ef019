//! Headline service
//!
//! Keyword search over the configured news feed.

use std::sync::Arc;

use crate::domain::entities::Headline;
use crate::domain::ports::NewsFeed;
use crate::error::FetchError;

/// Number of headlines returned when the caller doesn't ask for a count
pub const DEFAULT_HEADLINE_LIMIT: usize = 10;

/// Service for fetching headlines
pub struct HeadlineService<NF>
where
    NF: NewsFeed,
{
    feed: Arc<NF>,
}

impl<NF> HeadlineService<NF>
where
    NF: NewsFeed,
{
    pub fn new(feed: Arc<NF>) -> Self {
        Self { feed }
    }

    /// Fetch at most `limit` headlines matching `keyword`, in feed order
    pub async fn fetch_headlines(
        &self,
        keyword: &str,
        limit: usize,
    ) -> Result<Vec<Headline>, FetchError> {
        let mut headlines = self.feed.search(keyword, limit).await?;
        headlines.truncate(limit);

        tracing::info!(keyword, count = headlines.len(), "Fetched headlines");
        Ok(headlines)
    }
}
