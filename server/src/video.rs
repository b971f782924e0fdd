//! Tutorial video lookup through the YouTube Data API.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

pub const YOUTUBE_SEARCH_ENDPOINT: &str = "https://www.googleapis.com/youtube/v3/search";

#[derive(Error, Debug)]
pub enum VideoSearchError {
    #[error("Video search request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Video search API returned {status}: {body}")]
    Api { status: u16, body: String },
}

/// Trait for video search backends, enabling mockability in tests.
#[async_trait]
pub trait VideoSearch: Send + Sync {
    /// Id of the best-matching video for `query`, if any.
    async fn first_video_id(&self, query: &str) -> Result<Option<String>, VideoSearchError>;
}

/// Embeddable player URL for a video id.
pub fn embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{}", video_id)
}

#[derive(Debug, Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    id: ResourceId,
}

#[derive(Debug, Deserialize)]
struct ResourceId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

impl SearchListResponse {
    fn first_video_id(self) -> Option<String> {
        self.items.into_iter().find_map(|item| item.id.video_id)
    }
}

/// `search.list` client restricted to videos, returning a single result.
pub struct YouTubeClient {
    inner: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl YouTubeClient {
    pub fn new(api_key: impl Into<String>) -> Result<Self, reqwest::Error> {
        let inner = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;
        Ok(Self {
            inner,
            api_key: api_key.into(),
            endpoint: YOUTUBE_SEARCH_ENDPOINT.to_string(),
        })
    }

    /// Point the client at a different search endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }
}

#[async_trait]
impl VideoSearch for YouTubeClient {
    async fn first_video_id(&self, query: &str) -> Result<Option<String>, VideoSearchError> {
        let response = self
            .inner
            .get(&self.endpoint)
            .query(&[
                ("part", "snippet"),
                ("q", query),
                ("type", "video"),
                ("maxResults", "1"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VideoSearchError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let video_id = response.json::<SearchListResponse>().await?.first_video_id();
        tracing::debug!(query, ?video_id, "video search completed");
        Ok(video_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
    use std::collections::HashMap;

    /// Serve `router` on a loopback port and return its base URL.
    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_client_sends_search_parameters() {
        let router = Router::new().route(
            "/search",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let expected = [
                    ("part", "snippet"),
                    ("q", "pancakes tutorial"),
                    ("type", "video"),
                    ("maxResults", "1"),
                    ("key", "test-key"),
                ];
                if expected
                    .iter()
                    .all(|(k, v)| params.get(*k).map(String::as_str) == Some(*v))
                {
                    Json(serde_json::json!({"items": [{"id": {"videoId": "abc123"}}]}))
                } else {
                    Json(serde_json::json!({"items": []}))
                }
            }),
        );
        let base = serve(router).await;

        let client = YouTubeClient::new("test-key")
            .unwrap()
            .with_endpoint(format!("{}/search", base));
        let video_id = client.first_video_id("pancakes tutorial").await.unwrap();
        assert_eq!(video_id.as_deref(), Some("abc123"));
    }

    #[tokio::test]
    async fn test_client_reports_api_errors() {
        let router = Router::new().route(
            "/search",
            get(|| async { (StatusCode::FORBIDDEN, "quotaExceeded") }),
        );
        let base = serve(router).await;

        let client = YouTubeClient::new("test-key")
            .unwrap()
            .with_endpoint(format!("{}/search", base));
        match client.first_video_id("soup").await {
            Err(VideoSearchError::Api { status, body }) => {
                assert_eq!(status, 403);
                assert_eq!(body, "quotaExceeded");
            }
            other => panic!("expected an API error, got {:?}", other),
        }
    }

    #[test]
    fn test_embed_url() {
        assert_eq!(embed_url("abc123"), "https://www.youtube.com/embed/abc123");
    }

    #[test]
    fn test_parse_search_response() {
        let body = r#"{
            "kind": "youtube#searchListResponse",
            "items": [
                {"kind": "youtube#searchResult", "id": {"kind": "youtube#video", "videoId": "dQw4w9WgXcQ"}}
            ]
        }"#;
        let parsed: SearchListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.first_video_id().as_deref(), Some("dQw4w9WgXcQ"));
    }

    #[test]
    fn test_parse_empty_search_response() {
        let parsed: SearchListResponse = serde_json::from_str(r#"{"items": []}"#).unwrap();
        assert_eq!(parsed.first_video_id(), None);

        let parsed: SearchListResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.first_video_id(), None);
    }

    #[test]
    fn test_skips_results_without_video_id() {
        let body = r#"{"items": [
            {"id": {"kind": "youtube#channel", "channelId": "UC1"}},
            {"id": {"kind": "youtube#video", "videoId": "v2"}}
        ]}"#;
        let parsed: SearchListResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.first_video_id().as_deref(), Some("v2"));
    }
}
