//! Playlist reference extraction and player embedding.

use url::{form_urlencoded, Url};

use crate::ids::PlaylistId;

const EMBED_BASE: &str = "https://www.youtube.com/embed/videoseries";

/// Extract the playlist reference from a URL's `list` query parameter.
///
/// Returns `None` when the input is not an absolute URL, when it has no
/// `list` parameter, or when that parameter is empty. The first `list`
/// parameter wins if several are present.
pub fn extract_playlist_id(input: &str) -> Option<PlaylistId> {
    let url = Url::parse(input.trim()).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "list")
        .and_then(|(_, value)| PlaylistId::new(value.into_owned()))
}

/// Build the embeddable player URL for a playlist.
pub fn embed_url(playlist_id: &PlaylistId) -> String {
    let list: String = form_urlencoded::byte_serialize(playlist_id.as_str().as_bytes()).collect();
    format!("{EMBED_BASE}?list={list}")
}
