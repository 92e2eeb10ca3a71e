//! "HH:MM" clock time arithmetic for contiguous scheduling.
//!
//! A [`ClockTime`] is a count of minutes since the start of the day. Values
//! past `23:59` are representable and render as `"25:30"` style strings: a
//! day whose items add up past midnight is flagged by the recalculation
//! engine, never clamped or wrapped here.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A wall-clock time within (or past the end of) a single day.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime {
    minutes: u32,
}

impl ClockTime {
    /// Midnight, the default day start.
    pub const MIDNIGHT: ClockTime = ClockTime { minutes: 0 };

    /// End of the day; times at or past this mark an overlong agenda.
    pub const DAY_END: ClockTime = ClockTime { minutes: 24 * 60 };

    /// Creates a clock time from hours and minutes, saturating at the
    /// representable maximum.
    pub const fn new(hours: u32, minutes: u32) -> Self {
        Self {
            minutes: hours.saturating_mul(60).saturating_add(minutes),
        }
    }

    /// Creates a clock time from a raw minute count.
    pub const fn from_minutes(minutes: u32) -> Self {
        Self { minutes }
    }

    /// Total minutes since the start of the day.
    pub const fn total_minutes(self) -> u32 {
        self.minutes
    }

    /// Returns this time advanced by `minutes`, without clamping at `24:00`.
    /// Saturates at the representable maximum instead of overflowing, so
    /// arithmetic stays total even for absurd durations.
    #[must_use]
    pub const fn add_minutes(self, minutes: u32) -> Self {
        Self {
            minutes: self.minutes.saturating_add(minutes),
        }
    }

    /// Whether this time lies at or past `24:00`.
    pub const fn is_past_day_end(self) -> bool {
        self.minutes >= Self::DAY_END.minutes
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes / 60, self.minutes % 60)
    }
}

/// Parse error for "HH:MM" strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseClockTimeError {
    input: String,
}

impl fmt::Display for ParseClockTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid clock time '{}', expected HH:MM", self.input)
    }
}

impl std::error::Error for ParseClockTimeError {}

impl FromStr for ClockTime {
    type Err = ParseClockTimeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let err = || ParseClockTimeError { input: s.into() };

        let (hours, minutes) = s.split_once(':').ok_or_else(err)?;
        let hours: u32 = hours.parse().map_err(|_| err())?;
        let minutes: u32 = minutes.parse().map_err(|_| err())?;
        // Hours past 23 are accepted so recalculated overlong days survive a
        // round trip through the store.
        if minutes >= 60 {
            return Err(err());
        }

        Ok(Self::new(hours, minutes))
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ParseClockTimeError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_zero_pads() {
        assert_eq!(ClockTime::new(9, 5).to_string(), "09:05");
        assert_eq!(ClockTime::MIDNIGHT.to_string(), "00:00");
        assert_eq!(ClockTime::new(23, 59).to_string(), "23:59");
    }

    #[test]
    fn test_parse_round_trip() {
        let t: ClockTime = "14:30".parse().expect("valid time");
        assert_eq!(t, ClockTime::new(14, 30));
        assert_eq!(t.to_string().parse::<ClockTime>().unwrap(), t);
    }

    #[test]
    fn test_add_minutes_crosses_hour_boundary() {
        let t = ClockTime::new(9, 45).add_minutes(30);
        assert_eq!(t.to_string(), "10:15");
    }

    #[test]
    fn test_add_minutes_does_not_wrap_past_midnight() {
        let t = ClockTime::new(23, 30).add_minutes(45);
        assert_eq!(t.to_string(), "24:15");
        assert!(t.is_past_day_end());
    }

    #[test]
    fn test_add_minutes_saturates_instead_of_overflowing() {
        let t = ClockTime::new(23, 0).add_minutes(u32::MAX);
        assert_eq!(t.total_minutes(), u32::MAX);
        assert!(t.is_past_day_end());
    }

    #[test]
    fn test_new_saturates_on_huge_hours() {
        let t = ClockTime::new(u32::MAX, 59);
        assert_eq!(t.total_minutes(), u32::MAX);
    }

    #[test]
    fn test_parse_accepts_overlong_day_times() {
        let t: ClockTime = "25:30".parse().expect("overlong time");
        assert_eq!(t.total_minutes(), 25 * 60 + 30);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!("".parse::<ClockTime>().is_err());
        assert!("0900".parse::<ClockTime>().is_err());
        assert!("09:60".parse::<ClockTime>().is_err());
        assert!("nine:ten".parse::<ClockTime>().is_err());
    }
}
