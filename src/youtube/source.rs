//! Trait definition for playlist data sources.
//!
//! The membership resolver and duration aggregator only need two calls from
//! the platform: one page of a playlist's members, and the encoded durations
//! of a batch of videos. Keeping them behind a trait lets the pipeline run
//! against the real API or against an in-memory fake.

use async_trait::async_trait;
use playtime_common::{PlaylistId, VideoId};

/// One page of a playlist listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlaylistPage {
    /// Member video identifiers in playlist order.
    pub video_ids: Vec<VideoId>,
    /// Continuation token; `None` on the last page.
    pub next_page_token: Option<String>,
}

/// Async trait implemented by every playlist backend.
///
/// Implementations hold their own credentials. Errors carry the full cause;
/// callers collapse them into an upstream failure.
#[async_trait]
pub trait PlaylistSource: Send + Sync {
    /// Short, lowercase identifier for this source (e.g. `"youtube"`).
    fn name(&self) -> &'static str;

    /// Returns `true` when the source has credentials and can serve
    /// requests.
    fn is_available(&self) -> bool;

    /// Fetch one page of up to `max_results` playlist members, continuing
    /// from `page_token` when given.
    async fn playlist_page(
        &self,
        playlist_id: &PlaylistId,
        max_results: usize,
        page_token: Option<&str>,
    ) -> anyhow::Result<PlaylistPage>;

    /// Fetch the encoded durations of `video_ids` in one request, in the
    /// order the platform returns them.
    async fn video_durations(&self, video_ids: &[VideoId]) -> anyhow::Result<Vec<String>>;
}
