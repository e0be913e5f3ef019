//! Headlines API Server
//!
//! Searches a news feed for a keyword and summarizes the resulting
//! headlines with a language model.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{GoogleNewsClient, OllamaClient};
use app::{HeadlineService, SummaryService};
use config::Config;
use domain::ports::{ChatClient, NewsFeed};

/// Application state shared across all handlers
pub struct AppState<NF, CC>
where
    NF: NewsFeed,
    CC: ChatClient,
{
    pub headline_service: Arc<HeadlineService<NF>>,
    pub summary_service: Arc<SummaryService<CC>>,
}

impl<NF, CC> Clone for AppState<NF, CC>
where
    NF: NewsFeed,
    CC: ChatClient,
{
    fn clone(&self) -> Self {
        Self {
            headline_service: self.headline_service.clone(),
            summary_service: self.summary_service.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Build the HTTP router over any feed and chat backend
pub fn router<NF, CC>(state: AppState<NF, CC>) -> Router
where
    NF: NewsFeed + 'static,
    CC: ChatClient + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/headlines", get(handlers::get_headlines::<NF, CC>))
        .route("/headlines/summary", post(handlers::post_summary::<NF, CC>))
        // Open to any origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,headlines_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Headlines API...");

    // Load configuration
    let config = Config::from_env();
    tracing::info!(
        feed = %config.feed.base_url,
        ollama = %config.ollama_host,
        model = %config.model,
        "Configuration loaded"
    );

    // Create adapters
    let news_feed = Arc::new(GoogleNewsClient::new(config.feed.clone())?);
    let chat_client = Arc::new(OllamaClient::new(config.ollama_host.clone()));

    // Create app state
    let state = AppState {
        headline_service: Arc::new(HeadlineService::new(news_feed)),
        summary_service: Arc::new(SummaryService::new(chat_client, config.model.clone())),
    };

    let app = router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
