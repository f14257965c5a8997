//! Simulation module
//!
//! Tick-driven race core: racer motion, finish detection, countdown clock,
//! results compilation, and the session that ties them into one loop.

pub mod race;
pub mod racer;
pub mod results;
pub mod session;
pub mod timer;

pub use race::{FinishRecord, Race, RaceSnapshot, RaceStatus};
pub use racer::{Racer, RacerSnapshot, RacerState};
pub use results::{RaceResults, RankedFinish};
pub use session::{RaceSession, SessionSnapshot};
pub use timer::Countdown;
