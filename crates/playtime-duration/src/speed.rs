//! Playback speeds and running-time formatting.

/// The fixed set of playback speeds a running time is projected to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Speed {
    Normal,
    OneAndAQuarter,
    OneAndAHalf,
    Double,
}

impl Speed {
    /// Every speed, slowest first.
    pub const ALL: [Speed; 4] = [
        Speed::Normal,
        Speed::OneAndAQuarter,
        Speed::OneAndAHalf,
        Speed::Double,
    ];

    pub fn multiplier(self) -> f64 {
        match self {
            Speed::Normal => 1.0,
            Speed::OneAndAQuarter => 1.25,
            Speed::OneAndAHalf => 1.5,
            Speed::Double => 2.0,
        }
    }

    /// Short label such as `"1.25x"`.
    pub fn label(self) -> &'static str {
        match self {
            Speed::Normal => "1x",
            Speed::OneAndAQuarter => "1.25x",
            Speed::OneAndAHalf => "1.5x",
            Speed::Double => "2x",
        }
    }
}

impl std::fmt::Display for Speed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Whole hours, minutes and seconds of a running time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Breakdown {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl std::fmt::Display for Breakdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} hours, {} minutes, {} seconds",
            self.hours, self.minutes, self.seconds
        )
    }
}

/// Break a total running time down at a speed multiplier.
///
/// The division is real-valued; each component is floored afterwards. Hours
/// are not wrapped into days.
pub fn breakdown_at_speed(total_seconds: u64, multiplier: f64) -> Breakdown {
    let adjusted = total_seconds as f64 / multiplier;

    Breakdown {
        hours: (adjusted / 3600.0).floor() as u64,
        minutes: ((adjusted % 3600.0) / 60.0).floor() as u64,
        seconds: (adjusted % 60.0).floor() as u64,
    }
}

/// Format a total running time at a speed multiplier as
/// `"H hours, M minutes, S seconds"`.
///
/// ```
/// use playtime_duration::format_at_speed;
///
/// assert_eq!(format_at_speed(3723, 1.0), "1 hours, 2 minutes, 3 seconds");
/// assert_eq!(format_at_speed(3600, 2.0), "0 hours, 30 minutes, 0 seconds");
/// ```
pub fn format_at_speed(total_seconds: u64, multiplier: f64) -> String {
    breakdown_at_speed(total_seconds, multiplier).to_string()
}

/// Running time at one speed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProjectedDuration {
    pub speed: Speed,
    pub multiplier: f64,
    pub label: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub breakdown: Breakdown,
    pub formatted: String,
}

/// Running time of one total at every speed in [`Speed::ALL`].
///
/// Always computed in full from the total; entries are never adjusted from
/// one another.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SpeedProjection {
    entries: Vec<ProjectedDuration>,
}

impl SpeedProjection {
    pub fn compute(total_seconds: u64) -> Self {
        let entries = Speed::ALL
            .iter()
            .map(|&speed| {
                let breakdown = breakdown_at_speed(total_seconds, speed.multiplier());
                ProjectedDuration {
                    speed,
                    multiplier: speed.multiplier(),
                    label: speed.label().to_string(),
                    breakdown,
                    formatted: breakdown.to_string(),
                }
            })
            .collect();

        Self { entries }
    }

    pub fn entries(&self) -> &[ProjectedDuration] {
        &self.entries
    }

    /// Formatted running time at `speed`.
    pub fn get(&self, speed: Speed) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.speed == speed)
            .map(|entry| entry.formatted.as_str())
    }
}
