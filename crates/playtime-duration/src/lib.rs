//! # playtime-duration
//!
//! Decoding of the compact duration strings returned by the video metadata
//! API (`PT1H2M3S`) and formatting of a total running time at a playback
//! speed.
//!
//! ## Quick Start
//!
//! ```
//! use playtime_duration::{decode_seconds, format_at_speed, SpeedProjection};
//!
//! let total: u64 = ["PT30M", "PT1H", "PT15M"].iter().map(|d| decode_seconds(d)).sum();
//! assert_eq!(total, 6300);
//!
//! assert_eq!(format_at_speed(total, 1.0), "1 hours, 45 minutes, 0 seconds");
//!
//! let projection = SpeedProjection::compute(total);
//! assert_eq!(projection.entries().len(), 4);
//! ```

mod decode;
mod speed;

pub use decode::{decode_components, decode_seconds, DurationComponents};
pub use speed::{
    breakdown_at_speed, format_at_speed, Breakdown, ProjectedDuration, Speed, SpeedProjection,
};
