//! Countdown - wall-clock race clock
//!
//! Remaining time is derived from elapsed wall-clock time rather than tick
//! counts, so the display cannot drift. The clock freezes at 00:00 once the
//! duration is spent; the race itself keeps running until every racer
//! finishes, the duration is a target rather than a cutoff.

use std::time::Duration;

use crate::config::format_clock;

/// Countdown from the target race duration
#[derive(Debug, Clone)]
pub struct Countdown {
    duration_secs: u32,
}

impl Countdown {
    pub fn new(duration_secs: u32) -> Self {
        Self { duration_secs }
    }

    /// Whole seconds left on the clock, saturating at zero
    pub fn remaining(&self, elapsed: Duration) -> u32 {
        let elapsed_secs = u32::try_from(elapsed.as_secs()).unwrap_or(u32::MAX);
        self.duration_secs.saturating_sub(elapsed_secs)
    }

    /// `mm:ss` clock display for the given elapsed time, frozen at zero
    pub fn display(&self, elapsed: Duration) -> String {
        format_clock(self.remaining(elapsed))
    }

    /// True once the target duration has fully elapsed
    pub fn expired(&self, elapsed: Duration) -> bool {
        self.remaining(elapsed) == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_full_duration_at_start() {
        let countdown = Countdown::new(90);
        assert_eq!(countdown.display(Duration::ZERO), "01:30");
    }

    #[test]
    fn counts_down_whole_seconds() {
        let countdown = Countdown::new(90);
        assert_eq!(countdown.remaining(Duration::from_millis(500)), 90);
        assert_eq!(countdown.remaining(Duration::from_secs(1)), 89);
        assert_eq!(countdown.display(Duration::from_secs(89)), "00:01");
    }

    #[test]
    fn freezes_at_zero_past_expiry() {
        let countdown = Countdown::new(90);
        assert_eq!(countdown.display(Duration::from_secs(90)), "00:00");
        assert_eq!(countdown.display(Duration::from_secs(200)), "00:00");
        assert!(countdown.expired(Duration::from_secs(90)));
        assert!(!countdown.expired(Duration::from_secs(89)));
    }

    #[test]
    fn elapsed_beyond_u32_seconds_reads_zero() {
        let countdown = Countdown::new(90);
        let elapsed = Duration::from_secs(u64::from(u32::MAX) + 90);
        assert_eq!(countdown.remaining(elapsed), 0);
        assert_eq!(countdown.display(elapsed), "00:00");
    }
}
