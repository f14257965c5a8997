//! Race - race state and finish detection
//!
//! Holds the pack of racers, advances them each tick, and records finish
//! events until everyone has crossed the line.

use serde::{Deserialize, Serialize};

use crate::config::RaceConfig;
use crate::sim::racer::{Racer, RacerSnapshot, RacerState};

/// Race status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RaceStatus {
    NotStarted,
    Racing,
    Finished,
}

/// Immutable record of a racer crossing the finish line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishRecord {
    pub racer_id: u32,
    /// Race time at the crossing, in seconds
    pub elapsed_secs: f32,
}

/// Complete race state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Race {
    /// Race configuration
    pub config: RaceConfig,
    /// Current race status
    pub status: RaceStatus,
    /// All racers in the race
    pub racers: Vec<RacerState>,
    /// Elapsed race time (seconds)
    pub elapsed_secs: f32,
    /// Finish events in crossing order
    pub finish_records: Vec<FinishRecord>,
    /// Track units per second a 1.0-multiplier racer covers
    base_speed: f32,
}

impl Race {
    /// Create a new race with the given configuration
    pub fn new(config: RaceConfig) -> Self {
        // A racer holding a 1.0 multiplier the whole way finishes exactly
        // on the target duration. Duration is validated upstream; direct
        // construction with zero still gets a finite speed.
        let base_speed = config.track_length / config.duration_secs.max(1) as f32;
        let racers = (0..config.racer_count).map(RacerState::new).collect();

        Self {
            config,
            status: RaceStatus::NotStarted,
            racers,
            elapsed_secs: 0.0,
            finish_records: Vec::new(),
            base_speed,
        }
    }

    /// Open the race; `update` is a no-op before this.
    pub fn start(&mut self) {
        if self.status == RaceStatus::NotStarted {
            self.status = RaceStatus::Racing;
        }
    }

    /// Advance the race by `delta` seconds of wall-clock time.
    pub fn update(&mut self, delta: f32) {
        if self.status != RaceStatus::Racing {
            return;
        }

        self.elapsed_secs += delta;
        let track_length = self.config.track_length;
        let base_speed = self.base_speed;

        for racer in &mut self.racers {
            if Racer::update(racer, delta, base_speed, track_length) {
                self.finish_records.push(FinishRecord {
                    racer_id: racer.id,
                    elapsed_secs: self.elapsed_secs,
                });
            }
        }

        if self.finish_records.len() == self.racers.len() {
            self.status = RaceStatus::Finished;
        }
    }

    /// Get compact snapshot for the display layer
    pub fn get_snapshot(&self) -> RaceSnapshot {
        RaceSnapshot {
            status: self.status,
            elapsed_secs: self.elapsed_secs,
            racers: self.racers.iter().map(RacerSnapshot::from).collect(),
            finisher_count: self.finish_records.len() as u32,
        }
    }

    /// Get current leader
    pub fn get_leader(&self) -> Option<&RacerState> {
        self.racers
            .iter()
            .max_by(|a, b| a.position.partial_cmp(&b.position).unwrap())
    }

    /// Get racer by ID
    pub fn get_racer(&self, id: u32) -> Option<&RacerState> {
        self.racers.iter().find(|r| r.id == id)
    }
}

/// Compact race snapshot for the display layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceSnapshot {
    pub status: RaceStatus,
    pub elapsed_secs: f32,
    pub racers: Vec<RacerSnapshot>,
    pub finisher_count: u32,
}
