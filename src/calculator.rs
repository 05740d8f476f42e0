//! Playlist duration calculation.
//!
//! Drives one calculation from a raw URL to a [`Calculation`]: reference
//! extraction, membership resolution, duration aggregation, decoding, and the
//! per-speed projection. Each stage runs strictly after the previous one.

use std::sync::Arc;

use playtime_common::{embed_url, extract_playlist_id, Error, PlaylistId, Result};
use playtime_duration::{decode_seconds, SpeedProjection};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::youtube::{aggregate_durations, resolve_membership, PlaylistSource};

/// Result of one playlist calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Calculation {
    pub playlist_id: PlaylistId,
    /// Embeddable player URL for the playlist.
    pub embed_url: String,
    /// Members listed by the playlist.
    pub video_count: usize,
    /// Durations the metadata endpoint returned. Lower than `video_count`
    /// when the playlist holds deleted or private videos.
    pub durations_found: usize,
    pub total_seconds: u64,
    pub durations: SpeedProjection,
}

/// Runs calculations against a [`PlaylistSource`].
#[derive(Clone)]
pub struct Calculator {
    source: Arc<dyn PlaylistSource>,
}

impl Calculator {
    pub fn new(source: Arc<dyn PlaylistSource>) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &dyn PlaylistSource {
        self.source.as_ref()
    }

    /// Calculate the running time of the playlist named by `raw_url`.
    ///
    /// A URL without a `list` parameter fails with
    /// [`Error::InvalidReference`] before any request is made.
    pub async fn calculate(&self, raw_url: &str) -> Result<Calculation> {
        let playlist_id = extract_playlist_id(raw_url)
            .ok_or_else(|| Error::invalid_reference(format!("no playlist in {raw_url:?}")))?;

        self.calculate_playlist(&playlist_id).await
    }

    /// Calculate the running time of an already extracted playlist.
    pub async fn calculate_playlist(&self, playlist_id: &PlaylistId) -> Result<Calculation> {
        let source = self.source.as_ref();

        let video_ids = resolve_membership(source, playlist_id).await?;
        let encoded = aggregate_durations(source, &video_ids).await?;
        let total_seconds = encoded.iter().map(|d| decode_seconds(d)).sum::<u64>();

        info!(
            playlist = %playlist_id,
            videos = video_ids.len(),
            total_seconds,
            "Calculated playlist duration"
        );

        Ok(Calculation {
            playlist_id: playlist_id.clone(),
            embed_url: embed_url(playlist_id),
            video_count: video_ids.len(),
            durations_found: encoded.len(),
            total_seconds,
            durations: SpeedProjection::compute(total_seconds),
        })
    }
}
