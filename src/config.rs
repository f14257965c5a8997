//! Race configuration and input validation.
//!
//! Everything here runs before a session exists, so a rejected input leaves
//! no partial race state behind.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minimum number of racers in a race
pub const MIN_RACERS: u32 = 1;
/// Maximum number of racers in a race
pub const MAX_RACERS: u32 = 100;

/// Validation and parse failures surfaced before race start
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("racer count must be between {MIN_RACERS} and {MAX_RACERS}, got {0}")]
    RacerCount(u32),
    #[error("duration must be at least 1 second")]
    DurationTooShort,
    #[error("invalid duration {0:?}: expected mm:ss (minutes 0-99, seconds 0-59) or a whole number of seconds")]
    DurationFormat(String),
    #[error("track length must be positive, got {0}")]
    TrackLength(f32),
}

/// Race configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceConfig {
    /// Track length in display units
    pub track_length: f32,
    /// Number of racers
    pub racer_count: u32,
    /// Target race duration in seconds
    pub duration_secs: u32,
}

impl Default for RaceConfig {
    fn default() -> Self {
        Self {
            track_length: 1200.0,
            racer_count: 8,
            duration_secs: 60,
        }
    }
}

impl RaceConfig {
    /// Check the config against the input bounds. Called by
    /// [`RaceSession::start`](crate::RaceSession::start) before any race
    /// state is created.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.racer_count < MIN_RACERS || self.racer_count > MAX_RACERS {
            return Err(ConfigError::RacerCount(self.racer_count));
        }
        if self.duration_secs < 1 {
            return Err(ConfigError::DurationTooShort);
        }
        if !(self.track_length > 0.0) {
            return Err(ConfigError::TrackLength(self.track_length));
        }
        Ok(())
    }
}

/// Longest duration the `mm:ss` clock can express (99:59)
pub const MAX_DURATION_SECS: u32 = 99 * 60 + 59;

/// Parse a duration entered as `mm:ss` (minutes 0-99, seconds 0-59) or as a
/// plain number of seconds. Either form is capped at [`MAX_DURATION_SECS`].
pub fn parse_duration(input: &str) -> Result<u32, ConfigError> {
    let input = input.trim();
    let bad = || ConfigError::DurationFormat(input.to_string());

    if let Some((m, s)) = input.split_once(':') {
        let minutes: u32 = m.parse().map_err(|_| bad())?;
        let seconds: u32 = s.parse().map_err(|_| bad())?;
        if minutes > 99 || seconds > 59 {
            return Err(bad());
        }
        Ok(minutes * 60 + seconds)
    } else {
        let secs: u32 = input.parse().map_err(|_| bad())?;
        if secs > MAX_DURATION_SECS {
            return Err(bad());
        }
        Ok(secs)
    }
}

/// Format whole seconds as a zero-padded `mm:ss` clock string.
pub fn format_clock(total_secs: u32) -> String {
    format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_racer_count_bounds() {
        for count in [1, 50, 100] {
            let config = RaceConfig {
                racer_count: count,
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "count {count} should pass");
        }
    }

    #[test]
    fn rejects_racer_count_out_of_range() {
        for count in [0, 101] {
            let config = RaceConfig {
                racer_count: count,
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ConfigError::RacerCount(count)));
        }
    }

    #[test]
    fn rejects_zero_duration() {
        let config = RaceConfig {
            duration_secs: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::DurationTooShort));
    }

    #[test]
    fn rejects_nonpositive_track_length() {
        let config = RaceConfig {
            track_length: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TrackLength(_))
        ));
    }

    #[test]
    fn parses_mm_ss() {
        assert_eq!(parse_duration("01:30"), Ok(90));
        assert_eq!(parse_duration("00:05"), Ok(5));
        assert_eq!(parse_duration("99:59"), Ok(99 * 60 + 59));
    }

    #[test]
    fn parses_plain_seconds() {
        assert_eq!(parse_duration("90"), Ok(90));
        assert_eq!(parse_duration(" 45 "), Ok(45));
        assert_eq!(parse_duration("5999"), Ok(MAX_DURATION_SECS));
    }

    #[test]
    fn plain_seconds_respect_the_clock_cap() {
        // 6000s is 100:00, past what the mm:ss form can express
        for input in ["6000", "4000000000"] {
            assert!(
                matches!(parse_duration(input), Err(ConfigError::DurationFormat(_))),
                "input {input:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_malformed_durations() {
        for input in ["1:2:3", "aa:bb", "05:60", "100:00", "", "-5"] {
            assert!(
                matches!(parse_duration(input), Err(ConfigError::DurationFormat(_))),
                "input {input:?} should be rejected"
            );
        }
    }

    #[test]
    fn formats_clock() {
        assert_eq!(format_clock(90), "01:30");
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(99 * 60 + 59), "99:59");
    }
}
