//! Racer - individual racer state and motion
//!
//! Each racer carries a position along the track and a stochastic speed
//! multiplier. The simulation updates all racers each tick.

use serde::{Deserialize, Serialize};

/// Complete state for a single racer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RacerState {
    /// Unique racer ID
    pub id: u32,
    /// Distance traveled along the track (display units)
    pub position: f32,
    /// Current multiplier applied to the base speed
    pub speed_multiplier: f32,
    /// Set once the racer crosses the finish line; state is frozen after
    pub finished: bool,
}

impl RacerState {
    /// Create a racer at the start line with a randomized opening pace
    pub fn new(id: u32) -> Self {
        Self {
            id,
            position: 0.0,
            speed_multiplier: Racer::INITIAL_MIN + rand::random::<f32>() * Racer::INITIAL_SPAN,
            finished: false,
        }
    }
}

/// Racer motion logic
pub struct Racer;

impl Racer {
    /// Probability per tick of re-rolling the speed multiplier
    const REROLL_CHANCE: f32 = 0.2;
    /// Re-rolled multiplier band: [0.3, 2.0]
    const REROLL_MIN: f32 = 0.3;
    const REROLL_SPAN: f32 = 1.7;
    /// Opening multiplier band: [0.5, 2.0]
    const INITIAL_MIN: f32 = 0.5;
    const INITIAL_SPAN: f32 = 1.5;

    /// Advance a single racer for one tick.
    ///
    /// `base_speed` is track units per second and `delta` the wall-clock
    /// seconds since the previous tick. A finished racer never moves again.
    /// Returns true if the racer crossed the finish line during this tick.
    pub fn update(
        state: &mut RacerState,
        delta: f32,
        base_speed: f32,
        track_length: f32,
    ) -> bool {
        if state.finished {
            return false;
        }

        // Uneven pacing: occasionally re-roll within a wide band
        if rand::random::<f32>() < Self::REROLL_CHANCE {
            state.speed_multiplier =
                Self::REROLL_MIN + rand::random::<f32>() * Self::REROLL_SPAN;
        }

        state.position += base_speed * state.speed_multiplier * delta;

        if state.position >= track_length {
            state.position = track_length;
            state.finished = true;
            return true;
        }
        false
    }
}

/// Compact racer state for transfer to the display layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RacerSnapshot {
    pub id: u32,
    pub position: f32,
    pub finished: bool,
}

impl From<&RacerState> for RacerSnapshot {
    fn from(state: &RacerState) -> Self {
        Self {
            id: state.id,
            position: state.position,
            finished: state.finished,
        }
    }
}
