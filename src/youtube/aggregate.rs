//! Batched duration retrieval.

use playtime_common::{Error, Result, VideoId};
use tracing::debug;

use super::source::PlaylistSource;

/// Most identifiers the metadata endpoint accepts per request.
pub const MAX_BATCH_SIZE: usize = 50;

/// Fetch the encoded duration of every video in `video_ids`.
///
/// Identifiers are sent in contiguous batches of at most [`MAX_BATCH_SIZE`],
/// one request per batch, strictly in sequence. Results keep batch order and
/// within-batch order. A failing batch aborts the whole aggregation.
pub async fn aggregate_durations(
    source: &dyn PlaylistSource,
    video_ids: &[VideoId],
) -> Result<Vec<String>> {
    let mut durations = Vec::with_capacity(video_ids.len());

    for (index, batch) in video_ids.chunks(MAX_BATCH_SIZE).enumerate() {
        let batch_durations = source
            .video_durations(batch)
            .await
            .map_err(|e| Error::upstream(format!("{e:#}")))?;

        debug!(
            batch = index,
            requested = batch.len(),
            returned = batch_durations.len(),
            "Fetched duration batch"
        );
        durations.extend(batch_durations);
    }

    Ok(durations)
}
