//! Playtime-Common: Shared types and utilities.
//!
//! This crate provides common functionality used across playtime:
//!
//! - **Typed IDs**: String wrappers for playlist and video identifiers
//! - **Playlist References**: Extraction of the `list` parameter from a URL
//!   and construction of the embeddable player URL
//! - **Error Handling**: The user-facing error taxonomy and result alias
//!
//! # Examples
//!
//! ```
//! use playtime_common::{extract_playlist_id, Error, Result};
//!
//! let id = extract_playlist_id("https://www.youtube.com/playlist?list=PL123").unwrap();
//! assert_eq!(id.as_str(), "PL123");
//!
//! fn example() -> Result<()> {
//!     Err(Error::invalid_reference("no list parameter"))
//! }
//! ```

pub mod error;
pub mod ids;
pub mod reference;

pub use error::{Error, Result};
pub use ids::*;
pub use reference::{embed_url, extract_playlist_id};
