//! Duration string decoder.
//!
//! Grammar, with every bracketed component optional and independent:
//!
//! ```text
//! duration := 'P' [ number 'D' ] [ 'T' [ number 'H' ] [ number 'M' ] [ number 'S' ] ]
//! number   := digit+
//! ```
//!
//! Decoding never fails. The duration starts at the first `P` that is
//! followed by at least one recognisable component; anything before it is
//! skipped. Parsing stops at the first character the grammar cannot place,
//! and every component from that point on contributes zero. A number too
//! large for `u64` cannot be placed either, so it drops its own component
//! and every one after it.

use winnow::ascii::digit1;
use winnow::combinator::{opt, preceded, terminated};
use winnow::prelude::*;

const SECONDS_PER_MINUTE: u64 = 60;
const SECONDS_PER_HOUR: u64 = 3_600;
const SECONDS_PER_DAY: u64 = 86_400;

/// The individual components found in an encoded duration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DurationComponents {
    pub days: Option<u64>,
    pub hours: Option<u64>,
    pub minutes: Option<u64>,
    pub seconds: Option<u64>,
}

impl DurationComponents {
    /// True when no component was recognised.
    pub fn is_empty(&self) -> bool {
        self.days.is_none() && self.hours.is_none() && self.minutes.is_none() && self.seconds.is_none()
    }

    /// Total length in seconds. Absent components count as zero; the sum
    /// saturates instead of overflowing.
    pub fn total_seconds(&self) -> u64 {
        let part = |value: Option<u64>, unit: u64| value.unwrap_or(0).saturating_mul(unit);
        part(self.days, SECONDS_PER_DAY)
            .saturating_add(part(self.hours, SECONDS_PER_HOUR))
            .saturating_add(part(self.minutes, SECONDS_PER_MINUTE))
            .saturating_add(self.seconds.unwrap_or(0))
    }
}

fn number(input: &mut &str) -> PResult<u64> {
    digit1.parse_to().parse_next(input)
}

fn component(unit: char) -> impl FnMut(&mut &str) -> PResult<u64> {
    move |input: &mut &str| terminated(number, unit).parse_next(input)
}

fn time_part(input: &mut &str) -> PResult<(Option<u64>, Option<u64>, Option<u64>)> {
    preceded(
        'T',
        (opt(component('H')), opt(component('M')), opt(component('S'))),
    )
    .parse_next(input)
}

fn duration(input: &mut &str) -> PResult<DurationComponents> {
    let _ = 'P'.parse_next(input)?;
    let days = opt(component('D')).parse_next(input)?;
    let time = opt(time_part).parse_next(input)?;
    let (hours, minutes, seconds) = time.unwrap_or((None, None, None));

    Ok(DurationComponents {
        days,
        hours,
        minutes,
        seconds,
    })
}

/// Decode an encoded duration into its components.
///
/// Returns empty components when no `P` designator starts a duration.
pub fn decode_components(encoded: &str) -> DurationComponents {
    encoded
        .match_indices('P')
        .map(|(start, _)| {
            let mut input = &encoded[start..];
            duration(&mut input).unwrap_or_default()
        })
        .find(|parts| !parts.is_empty())
        .unwrap_or_default()
}

/// Decode an encoded duration into a count of seconds.
///
/// Total: malformed or missing components decode as zero.
///
/// ```
/// use playtime_duration::decode_seconds;
///
/// assert_eq!(decode_seconds("PT1H2M3S"), 3723);
/// assert_eq!(decode_seconds("PT45S"), 45);
/// assert_eq!(decode_seconds("garbage"), 0);
/// ```
pub fn decode_seconds(encoded: &str) -> u64 {
    decode_components(encoded).total_seconds()
}
