//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`], which starts a [`MockServer`] standing in for
//! the YouTube Data API and builds a full [`AppContext`] pointed at it. The
//! [`TestHarness::with_server`] constructor also starts Axum on a random port
//! for HTTP-level testing.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use playtime::config::Config;
use playtime::server::{create_router, AppContext};
use playtime::youtube::YouTubeClient;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "test-key";

/// Harness wrapping a mock Data API and an [`AppContext`] that talks to it.
pub struct TestHarness {
    pub api: MockServer,
    pub ctx: AppContext,
}

impl TestHarness {
    /// Start the mock API and build a context with a 5-second deadline.
    pub async fn new() -> Self {
        Self::with_timeout(5).await
    }

    pub async fn with_timeout(request_timeout_secs: u64) -> Self {
        let api = MockServer::start().await;

        let mut config = Config::default();
        config.youtube.api_key = Some(API_KEY.to_string());
        config.youtube.api_base = api.uri();
        config.youtube.request_timeout_secs = request_timeout_secs;

        let ctx = AppContext::from_config(config).expect("failed to build context");
        Self { api, ctx }
    }

    /// Start an Axum server on a random port and return the harness together
    /// with the bound socket address.
    pub async fn with_server() -> (Self, SocketAddr) {
        let harness = Self::new().await;
        let app = create_router(harness.ctx.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let addr = listener.local_addr().expect("failed to get local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        (harness, addr)
    }
}

/// A client for `server` with a short deadline.
pub fn client_for(server: &MockServer) -> YouTubeClient {
    YouTubeClient::with_options(API_KEY.into(), server.uri(), Duration::from_secs(5))
        .expect("failed to build client")
}

/// `count` identifiers named `{prefix}{index}`.
pub fn ids(prefix: &str, count: usize) -> Vec<String> {
    (0..count).map(|i| format!("{prefix}{i}")).collect()
}

pub fn playlist_page_body(video_ids: &[String], next_page_token: Option<&str>) -> Value {
    let items: Vec<Value> = video_ids
        .iter()
        .map(|id| json!({ "kind": "youtube#playlistItem", "contentDetails": { "videoId": id } }))
        .collect();

    let mut body = json!({ "kind": "youtube#playlistItemListResponse", "items": items });
    if let Some(token) = next_page_token {
        body["nextPageToken"] = json!(token);
    }
    body
}

pub fn videos_body(video_ids: &[String], durations: &[String]) -> Value {
    let items: Vec<Value> = video_ids
        .iter()
        .zip(durations)
        .map(|(id, duration)| json!({ "id": id, "contentDetails": { "duration": duration } }))
        .collect();
    json!({ "kind": "youtube#videoListResponse", "items": items })
}

/// Mount one mock per playlist page. Page `i > 0` is served for
/// `pageToken=token-{i}`; the first page answers requests without a more
/// specific match. Each page must be requested exactly once.
pub async fn mount_playlist(server: &MockServer, playlist_id: &str, pages: &[Vec<String>]) {
    for (index, page) in pages.iter().enumerate() {
        let next = (index + 1 < pages.len()).then(|| format!("token-{}", index + 1));
        let mut mock = Mock::given(method("GET"))
            .and(path("/playlistItems"))
            .and(query_param("part", "contentDetails"))
            .and(query_param("maxResults", "50"))
            .and(query_param("playlistId", playlist_id))
            .and(query_param("key", API_KEY));

        if index > 0 {
            mock = mock.and(query_param("pageToken", format!("token-{index}").as_str()));
        }

        mock.respond_with(
            ResponseTemplate::new(200).set_body_json(playlist_page_body(page, next.as_deref())),
        )
        .with_priority(if index > 0 { 1 } else { 5 })
        .expect(1)
        .mount(server)
        .await;
    }
}

/// Mount one mock per batch of 50 identifiers, each expecting exactly one
/// request carrying that batch comma-joined.
pub async fn mount_durations(server: &MockServer, video_ids: &[String], durations: &[String]) {
    for (batch_ids, batch_durations) in video_ids.chunks(50).zip(durations.chunks(50)) {
        Mock::given(method("GET"))
            .and(path("/videos"))
            .and(query_param("part", "contentDetails"))
            .and(query_param("id", batch_ids.join(",").as_str()))
            .and(query_param("key", API_KEY))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(videos_body(batch_ids, batch_durations)),
            )
            .expect(1)
            .mount(server)
            .await;
    }
}
