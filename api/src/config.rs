use std::env;
use std::time::Duration;

pub const DEFAULT_FEED_BASE_URL: &str = "https://news.google.com";
pub const DEFAULT_OLLAMA_HOST: &str = "http://localhost:11434";
pub const DEFAULT_MODEL: &str = "llama3.1";

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub feed: FeedConfig,
    /// Base URL of the Ollama server used for summaries
    pub ollama_host: String,
    /// Model used when a summary request doesn't name one
    pub model: String,
}

/// Search feed parameters
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedConfig {
    pub base_url: String,
    /// `hl` query parameter
    pub language: String,
    /// `gl` query parameter
    pub region: String,
    /// `ceid` query parameter
    pub edition: String,
    pub timeout: Duration,
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_FEED_BASE_URL.to_string(),
            language: "en-IN".to_string(),
            region: "IN".to_string(),
            edition: "IN:en".to_string(),
            timeout: Duration::from_secs(10),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = FeedConfig::default();

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            feed: FeedConfig {
                base_url: env::var("FEED_BASE_URL").unwrap_or(defaults.base_url),
                language: env::var("FEED_LANGUAGE").unwrap_or(defaults.language),
                region: env::var("FEED_REGION").unwrap_or(defaults.region),
                edition: env::var("FEED_EDITION").unwrap_or(defaults.edition),
                timeout: env::var("FEED_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.timeout),
            },
            ollama_host: env::var("OLLAMA_HOST")
                .unwrap_or_else(|_| DEFAULT_OLLAMA_HOST.to_string()),
            model: env::var("OLLAMA_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        }
    }
}
