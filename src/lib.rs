//! Derby - icon-racing simulation core
//!
//! Runs a configurable pack of racers across a numeric track toward a target
//! duration, detects finish-line crossings, and compiles ranked standings
//! with a top-3 podium. Rendering, input widgets and everything else visual
//! live outside this crate: the boundary is numeric dimensions in,
//! serializable snapshots and ranked results out.

pub mod config;
pub mod sim;

pub use config::{format_clock, parse_duration, ConfigError, RaceConfig};
pub use sim::race::{FinishRecord, Race, RaceSnapshot, RaceStatus};
pub use sim::racer::{Racer, RacerSnapshot, RacerState};
pub use sim::results::{RaceResults, RankedFinish};
pub use sim::session::{RaceSession, SessionSnapshot};
pub use sim::timer::Countdown;
