//! Headline handlers
//!
//! Endpoints for headline search and summaries.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::app::DEFAULT_HEADLINE_LIMIT;
use crate::domain::entities::Headline;
use crate::domain::ports::{ChatClient, NewsFeed};
use crate::error::AppError;
use crate::AppState;

/// Query params for headline search
#[derive(Debug, Deserialize)]
pub struct HeadlinesQuery {
    /// Search keyword
    pub q: String,
}

/// Request body for a summary
#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    /// Headline titles, in display order
    pub headlines: Vec<String>,
}

/// Response body for a summary
#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// GET /headlines?q=<keyword>
///
/// Search the news feed and return up to ten headlines.
pub async fn get_headlines<NF, CC>(
    State(state): State<AppState<NF, CC>>,
    Query(query): Query<HeadlinesQuery>,
) -> Result<Json<Vec<Headline>>, AppError>
where
    NF: NewsFeed + 'static,
    CC: ChatClient + 'static,
{
    let headlines = state
        .headline_service
        .fetch_headlines(&query.q, DEFAULT_HEADLINE_LIMIT)
        .await?;

    Ok(Json(headlines))
}

/// POST /headlines/summary
///
/// Summarize the given titles with the default model.
pub async fn post_summary<NF, CC>(
    State(state): State<AppState<NF, CC>>,
    Json(request): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>, AppError>
where
    NF: NewsFeed + 'static,
    CC: ChatClient + 'static,
{
    let summary = state
        .summary_service
        .summarize_headlines(request.headlines.as_slice())
        .await?;

    Ok(Json(SummaryResponse { summary }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_summary_request_valid() {
        let json = r#"{"headlines": ["A", "B"]}"#;
        let request: SummaryRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.headlines, vec!["A", "B"]);
    }

    #[test]
    fn parse_summary_request_missing_headlines() {
        let result: Result<SummaryRequest, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[test]
    fn parse_summary_request_rejects_non_string_items() {
        let json = r#"{"headlines": [{"title": "A", "link": "https://news.example/a"}]}"#;
        let result: Result<SummaryRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn serialize_summary_response() {
        let response = SummaryResponse {
            summary: "No headlines found.".to_string(),
        };
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"summary":"No headlines found."}"#);
    }
}
