//! Session - unified race loop
//!
//! Owns the race and the countdown in a single tick loop. The page version
//! of this ran two interval callbacks plus a self-rescheduling poll after
//! timeout; folding them into one loop that already owns finish detection
//! means a single `stop` cancels everything and no state survives a reset.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::config::{format_clock, ConfigError, RaceConfig};
use crate::sim::race::{Race, RaceSnapshot, RaceStatus};
use crate::sim::results::RaceResults;
use crate::sim::timer::Countdown;

/// Countdown display refresh cadence
const CLOCK_REFRESH: Duration = Duration::from_millis(100);

/// A single race from start to results.
///
/// Constructed per race and discarded on reset, so nothing leaks into the
/// next run.
pub struct RaceSession {
    race: Race,
    countdown: Countdown,
    started_at: Instant,
    last_tick: Instant,
    /// Race elapsed time at the last clock refresh
    last_clock_refresh: Duration,
    clock_display: String,
    running: bool,
}

impl RaceSession {
    /// Validate the config and start a race
    pub fn start(config: RaceConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        log::info!(
            "race started: {} racers over {} units, target {}s",
            config.racer_count,
            config.track_length,
            config.duration_secs
        );

        let countdown = Countdown::new(config.duration_secs);
        let clock_display = countdown.display(Duration::ZERO);
        let mut race = Race::new(config);
        race.start();

        let now = Instant::now();
        Ok(Self {
            race,
            countdown,
            started_at: now,
            last_tick: now,
            last_clock_refresh: Duration::ZERO,
            clock_display,
            running: true,
        })
    }

    /// Advance the session by the wall-clock delta since the previous tick
    /// and return the current snapshot. Cadence is best-effort: a tick that
    /// runs long simply delays the next one.
    pub fn tick(&mut self) -> SessionSnapshot {
        if self.running {
            let now = Instant::now();
            let delta = now.duration_since(self.last_tick).as_secs_f32();
            self.last_tick = now;
            self.advance(delta, now.duration_since(self.started_at));
        }
        self.snapshot()
    }

    fn advance(&mut self, delta: f32, elapsed: Duration) {
        self.race.update(delta);

        if elapsed.saturating_sub(self.last_clock_refresh) >= CLOCK_REFRESH {
            self.refresh_clock(elapsed);
            self.last_clock_refresh = elapsed;
        }

        if self.race.status == RaceStatus::Finished {
            log::info!(
                "all {} racers finished after {:.2}s",
                self.race.racers.len(),
                self.race.elapsed_secs
            );
            self.running = false;
        }
    }

    fn refresh_clock(&mut self, elapsed: Duration) {
        // The clock zeroes out as soon as the first racer crosses the line,
        // matching the original display behavior.
        self.clock_display = if self.race.finish_records.is_empty() {
            self.countdown.display(elapsed)
        } else {
            format_clock(0)
        };
    }

    /// Stop the session early. The unified loop makes this one cancellation
    /// point for motion and countdown alike; a stopped session never
    /// restarts.
    pub fn stop(&mut self) {
        if self.running {
            log::info!("race stopped after {:.2}s", self.race.elapsed_secs);
            self.running = false;
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True once every racer has crossed the line
    pub fn finished(&self) -> bool {
        self.race.status == RaceStatus::Finished
    }

    /// Compiled standings, available once the race finished
    pub fn results(&self) -> Option<RaceResults> {
        self.finished()
            .then(|| RaceResults::compile(&self.race.finish_records))
    }

    /// Current snapshot without advancing the simulation
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            clock: self.clock_display.clone(),
            race: self.race.get_snapshot(),
        }
    }
}

/// Per-tick state handed to the display layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Countdown display, `mm:ss`
    pub clock: String,
    pub race: RaceSnapshot,
}
