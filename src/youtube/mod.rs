//! Playlist aggregation against the YouTube Data API.
//!
//! # Module layout
//!
//! - [`source`] -- The [`PlaylistSource`] trait and the page type it returns.
//! - [`client`] -- [`YouTubeClient`], the Data API v3 implementation.
//! - [`membership`] -- Paginated resolution of a playlist's video identifiers.
//! - [`aggregate`] -- Batched retrieval of per-video encoded durations.

pub mod aggregate;
pub mod client;
pub mod membership;
pub mod source;

pub use aggregate::{aggregate_durations, MAX_BATCH_SIZE};
pub use client::YouTubeClient;
pub use membership::{resolve_membership, PAGE_SIZE, SUPPORTED_PLAYLIST_LEN};
pub use source::{PlaylistPage, PlaylistSource};
