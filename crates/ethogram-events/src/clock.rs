//! Simulation Clock Types
//!
//! Handles simulation time with both tick-based and human-readable hour formats.
//!
//! # Example
//!
//! ```
//! use ethogram_events::{SimTime, SimTimestamp};
//!
//! let ts = SimTimestamp::new(8, SimTime::from_hours(24));
//! assert_eq!(ts.tick, 8);
//! assert_eq!(ts.time.to_string(), "day_2.hour_00");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Number of simulated hours per simulated day.
pub const HOURS_PER_DAY: u64 = 24;

/// A point in simulated time, measured in whole hours from the start of the run.
///
/// Serializes to strings like "day_2.hour_09". Days are 1-based, hours within
/// a day are 0-based.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SimTime {
    hours: u64,
}

impl SimTime {
    /// Creates a SimTime from a total hour count.
    pub fn from_hours(hours: u64) -> Self {
        Self { hours }
    }

    /// Creates a SimTime for the start of the simulation.
    pub fn start() -> Self {
        Self { hours: 0 }
    }

    /// Total hours elapsed since the start of the run.
    pub fn total_hours(self) -> u64 {
        self.hours
    }

    /// The 1-based day this time falls on.
    pub fn day(self) -> u64 {
        self.hours / HOURS_PER_DAY + 1
    }

    /// The hour within the day, in [0, 24).
    pub fn hour_of_day(self) -> u64 {
        self.hours % HOURS_PER_DAY
    }

    /// Returns this time advanced by the given number of hours.
    pub fn advanced_by(self, hours: u64) -> Self {
        Self {
            hours: self.hours + hours,
        }
    }
}

impl fmt::Display for SimTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "day_{}.hour_{:02}", self.day(), self.hour_of_day())
    }
}

/// Error type for parsing SimTime from strings.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseTimeError {
    InvalidFormat(String),
    InvalidDay(String),
    InvalidHour(String),
}

impl fmt::Display for ParseTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseTimeError::InvalidFormat(s) => {
                write!(f, "invalid time format: '{}', expected 'day_N.hour_HH'", s)
            }
            ParseTimeError::InvalidDay(s) => write!(f, "invalid day: '{}'", s),
            ParseTimeError::InvalidHour(s) => write!(f, "invalid hour: '{}'", s),
        }
    }
}

impl std::error::Error for ParseTimeError {}

impl FromStr for SimTime {
    type Err = ParseTimeError;

    /// Parses a SimTime from a string like "day_2.hour_09".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split('.').collect();
        if parts.len() != 2 {
            return Err(ParseTimeError::InvalidFormat(s.to_string()));
        }

        // Parse day from "day_N" (1-based)
        let day_part = parts[0];
        let day = day_part
            .strip_prefix("day_")
            .ok_or_else(|| ParseTimeError::InvalidFormat(s.to_string()))?
            .parse::<u64>()
            .map_err(|_| ParseTimeError::InvalidDay(day_part.to_string()))?;
        if day == 0 {
            return Err(ParseTimeError::InvalidDay(day_part.to_string()));
        }

        // Parse hour from "hour_HH"
        let hour_part = parts[1];
        let hour = hour_part
            .strip_prefix("hour_")
            .ok_or_else(|| ParseTimeError::InvalidFormat(s.to_string()))?
            .parse::<u64>()
            .map_err(|_| ParseTimeError::InvalidHour(hour_part.to_string()))?;
        if hour >= HOURS_PER_DAY {
            return Err(ParseTimeError::InvalidHour(hour_part.to_string()));
        }

        Ok(SimTime {
            hours: (day - 1) * HOURS_PER_DAY + hour,
        })
    }
}

// Custom serialization for SimTime - serialize as a string
impl Serialize for SimTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for SimTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A point in simulation time.
///
/// Contains both a monotonic tick counter and a human-readable time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimTimestamp {
    /// Monotonically increasing simulation tick.
    pub tick: u64,
    /// Human-readable time within the run.
    pub time: SimTime,
}

impl SimTimestamp {
    /// Creates a new SimTimestamp.
    pub fn new(tick: u64, time: SimTime) -> Self {
        Self { tick, time }
    }

    /// Creates a timestamp for the start of the simulation.
    pub fn start() -> Self {
        Self {
            tick: 0,
            time: SimTime::start(),
        }
    }
}

/// The bounded simulation clock.
///
/// Advances in a fixed whole-hour increment from hour 0 to an inclusive end.
/// The tick loop runs while `in_horizon()` holds and calls `advance()` once
/// per tick, so a horizon of `N * increment` hours yields exactly N+1 ticks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimClock {
    /// Current time, advanced once per tick.
    pub current: SimTime,
    /// Inclusive end of the run.
    pub end: SimTime,
    /// Hours added per tick.
    pub increment_hours: u64,
}

impl SimClock {
    /// Creates a clock covering `horizon_hours` from hour 0, stepping by
    /// `increment_hours` per tick.
    pub fn new(horizon_hours: u64, increment_hours: u64) -> Self {
        Self {
            current: SimTime::start(),
            end: SimTime::from_hours(horizon_hours),
            increment_hours,
        }
    }

    /// True while the current time has not passed the inclusive end.
    pub fn in_horizon(&self) -> bool {
        self.current <= self.end
    }

    /// Advances the clock by one increment.
    pub fn advance(&mut self) {
        self.current = self.current.advanced_by(self.increment_hours);
    }

    /// Number of ticks a full run of this clock executes.
    pub fn expected_ticks(&self) -> u64 {
        self.end.total_hours() / self.increment_hours + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_display() {
        assert_eq!(SimTime::start().to_string(), "day_1.hour_00");
        assert_eq!(SimTime::from_hours(3).to_string(), "day_1.hour_03");
        assert_eq!(SimTime::from_hours(27).to_string(), "day_2.hour_03");
    }

    #[test]
    fn test_time_roundtrip() {
        let time = SimTime::from_hours(51);
        let parsed: SimTime = time.to_string().parse().unwrap();
        assert_eq!(parsed, time);
    }

    #[test]
    fn test_time_parse_errors() {
        assert!(matches!(
            "day_1".parse::<SimTime>(),
            Err(ParseTimeError::InvalidFormat(_))
        ));
        assert!(matches!(
            "day_0.hour_03".parse::<SimTime>(),
            Err(ParseTimeError::InvalidDay(_))
        ));
        assert!(matches!(
            "day_1.hour_24".parse::<SimTime>(),
            Err(ParseTimeError::InvalidHour(_))
        ));
    }

    #[test]
    fn test_time_serde_as_string() {
        let time = SimTime::from_hours(27);
        let json = serde_json::to_string(&time).unwrap();
        assert_eq!(json, "\"day_2.hour_03\"");
        let back: SimTime = serde_json::from_str(&json).unwrap();
        assert_eq!(back, time);
    }

    #[test]
    fn test_clock_inclusive_bound() {
        // Horizon of 168h at 3h per tick: 56 increments, 57 ticks.
        let mut clock = SimClock::new(168, 3);
        assert_eq!(clock.expected_ticks(), 57);

        let mut ticks = 0u64;
        while clock.in_horizon() {
            ticks += 1;
            clock.advance();
        }
        assert_eq!(ticks, 57);
    }

    #[test]
    fn test_clock_indivisible_horizon() {
        // 10h at 3h per tick: runs at hours 0, 3, 6, 9.
        let mut clock = SimClock::new(10, 3);
        let mut ticks = 0u64;
        while clock.in_horizon() {
            ticks += 1;
            clock.advance();
        }
        assert_eq!(ticks, 4);
    }
}
