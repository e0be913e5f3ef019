//! Google News RSS search client

use async_trait::async_trait;
use reqwest::Client;
use urlencoding::encode;

use super::parser::parse_headlines;
use crate::config::FeedConfig;
use crate::domain::entities::Headline;
use crate::domain::ports::NewsFeed;
use crate::error::FetchError;

/// Implementation of the news feed port over Google News search
pub struct GoogleNewsClient {
    http: Client,
    config: FeedConfig,
}

impl GoogleNewsClient {
    pub fn new(config: FeedConfig) -> Result<Self, FetchError> {
        let http = Client::builder().timeout(config.timeout).build()?;

        Ok(Self {
            http,
            config: FeedConfig {
                base_url: config.base_url.trim_end_matches('/').to_string(),
                ..config
            },
        })
    }

    /// Build the search feed URL for a keyword
    pub fn search_url(&self, keyword: &str) -> String {
        format!(
            "{}/rss/search?q={}&hl={}&gl={}&ceid={}",
            self.config.base_url,
            encode(keyword),
            self.config.language,
            self.config.region,
            self.config.edition
        )
    }
}

#[async_trait]
impl NewsFeed for GoogleNewsClient {
    async fn search(&self, keyword: &str, limit: usize) -> Result<Vec<Headline>, FetchError> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let url = self.search_url(keyword);
        tracing::debug!(%url, "Fetching news feed");

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = resp.text().await?;

        match parse_headlines(&body, limit) {
            Ok(headlines) => {
                tracing::debug!(count = headlines.len(), keyword, "Parsed news feed");
                Ok(headlines)
            }
            Err(e) => {
                tracing::warn!(error = %e, keyword, "Unparseable news feed, returning no headlines");
                Ok(Vec::new())
            }
        }
    }
}
