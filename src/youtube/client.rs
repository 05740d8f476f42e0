//! YouTube Data API v3 playlist source.
//!
//! Implements [`PlaylistSource`] on top of two list endpoints:
//!
//! - `playlistItems` for playlist membership (`part=contentDetails`)
//! - `videos` for per-video durations (`part=contentDetails`)
//!
//! Every request carries the API key as the `key` query parameter and runs
//! under a deadline. There is no retry: a failed or expired request fails
//! the call.

use std::time::Duration;

use anyhow::{anyhow, bail, Context};
use async_trait::async_trait;
use playtime_common::{PlaylistId, VideoId};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::config::YouTubeConfig;
use crate::youtube::source::{PlaylistPage, PlaylistSource};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";
const DEFAULT_DEADLINE: Duration = Duration::from_secs(30);

// ---------------------------------------------------------------------------
// API response types (private)
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse<T> {
    items: Vec<T>,
    next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItem {
    content_details: PlaylistItemDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlaylistItemDetails {
    video_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VideoItem {
    content_details: VideoDetails,
}

#[derive(Debug, Deserialize)]
struct VideoDetails {
    duration: String,
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// Data API v3 client.
///
/// # Examples
///
/// ```no_run
/// use playtime::youtube::YouTubeClient;
///
/// let client = YouTubeClient::new("your-api-key".into()).unwrap();
/// ```
#[derive(Clone)]
pub struct YouTubeClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    deadline: Duration,
}

impl std::fmt::Debug for YouTubeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YouTubeClient")
            .field("base_url", &self.base_url)
            .field("deadline", &self.deadline)
            .field("api_key", &"<redacted>")
            .finish()
    }
}

impl YouTubeClient {
    /// Create a client for the public API with the default 30-second
    /// deadline.
    pub fn new(api_key: String) -> anyhow::Result<Self> {
        Self::with_options(api_key, DEFAULT_BASE_URL.to_string(), DEFAULT_DEADLINE)
    }

    /// Create a client against `base_url`, with `deadline` bounding each
    /// request from send until the body is decoded.
    pub fn with_options(
        api_key: String,
        base_url: String,
        deadline: Duration,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(deadline)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self {
            client,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            deadline,
        })
    }

    pub fn from_config(config: &YouTubeConfig) -> anyhow::Result<Self> {
        Self::with_options(
            config.api_key().unwrap_or_default().to_string(),
            config.api_base.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a GET against `endpoint` and decode the JSON body.
    ///
    /// The key is appended here so it never shows up in the logged
    /// parameters.
    async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, String)],
    ) -> anyhow::Result<T> {
        let url = format!("{}/{endpoint}", self.base_url);
        debug!(endpoint, ?params, "YouTube request");

        // reqwest errors carry the request URL, key included; strip it
        // before the error reaches any log.
        let request = async {
            let resp = self
                .client
                .get(&url)
                .query(params)
                .query(&[("key", self.api_key.as_str())])
                .send()
                .await
                .map_err(reqwest::Error::without_url)
                .with_context(|| format!("YouTube request failed: {endpoint}"))?;

            let status = resp.status();
            if !status.is_success() {
                bail!("YouTube {endpoint} request returned HTTP {status}");
            }

            resp.json::<T>()
                .await
                .map_err(reqwest::Error::without_url)
                .with_context(|| format!("failed to parse YouTube {endpoint} response"))
        };

        tokio::time::timeout(self.deadline, request)
            .await
            .map_err(|_| anyhow!("YouTube request to {endpoint} exceeded {:?}", self.deadline))?
    }
}

#[async_trait]
impl PlaylistSource for YouTubeClient {
    fn name(&self) -> &'static str {
        "youtube"
    }

    fn is_available(&self) -> bool {
        !self.api_key.is_empty()
    }

    async fn playlist_page(
        &self,
        playlist_id: &PlaylistId,
        max_results: usize,
        page_token: Option<&str>,
    ) -> anyhow::Result<PlaylistPage> {
        let mut params = vec![
            ("part", "contentDetails".to_string()),
            ("maxResults", max_results.to_string()),
            ("playlistId", playlist_id.to_string()),
        ];
        if let Some(token) = page_token {
            params.push(("pageToken", token.to_string()));
        }

        let body: ListResponse<PlaylistItem> = self.get("playlistItems", &params).await?;

        Ok(PlaylistPage {
            video_ids: body
                .items
                .into_iter()
                .map(|item| VideoId::from(item.content_details.video_id))
                .collect(),
            next_page_token: body.next_page_token.filter(|t| !t.is_empty()),
        })
    }

    async fn video_durations(&self, video_ids: &[VideoId]) -> anyhow::Result<Vec<String>> {
        let ids = video_ids
            .iter()
            .map(VideoId::as_str)
            .collect::<Vec<_>>()
            .join(",");
        let params = [("part", "contentDetails".to_string()), ("id", ids)];

        let body: ListResponse<VideoItem> = self.get("videos", &params).await?;

        Ok(body
            .items
            .into_iter()
            .map(|item| item.content_details.duration)
            .collect())
    }
}
