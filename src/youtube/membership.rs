//! Playlist membership resolution.
//!
//! Walks the paginated playlist listing, following continuation tokens until
//! the platform stops issuing them. The loop is bounded only by the upstream
//! service.

use playtime_common::{Error, PlaylistId, Result, VideoId};
use tracing::{debug, warn};

use super::source::PlaylistSource;

/// Playlist items requested per page (the listing endpoint's maximum).
pub const PAGE_SIZE: usize = 50;

/// Largest playlist the tool is documented to support. Longer playlists are
/// still resolved; this only triggers a warning.
pub const SUPPORTED_PLAYLIST_LEN: usize = 500;

/// Resolve every member video of `playlist_id`, in playlist order.
///
/// Any failure aborts the whole resolution; no partial list is returned.
pub async fn resolve_membership(
    source: &dyn PlaylistSource,
    playlist_id: &PlaylistId,
) -> Result<Vec<VideoId>> {
    let mut video_ids = Vec::new();
    let mut page_token: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = source
            .playlist_page(playlist_id, PAGE_SIZE, page_token.as_deref())
            .await
            .map_err(|e| Error::upstream(format!("{e:#}")))?;
        pages += 1;

        debug!(
            playlist = %playlist_id,
            page = pages,
            items = page.video_ids.len(),
            "Resolved playlist page"
        );
        video_ids.extend(page.video_ids);

        match page.next_page_token {
            Some(token) => page_token = Some(token),
            None => break,
        }
    }

    if video_ids.len() > SUPPORTED_PLAYLIST_LEN {
        warn!(
            playlist = %playlist_id,
            videos = video_ids.len(),
            supported = SUPPORTED_PLAYLIST_LEN,
            "Playlist is larger than the supported size"
        );
    }

    Ok(video_ids)
}
