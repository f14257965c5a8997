//! Results compiler - ranking, podium and leaderboard
//!
//! Sorts finish records by time and turns them into ranked standings for
//! the display layer.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::sim::race::FinishRecord;

/// Number of podium slots
pub const PODIUM_SLOTS: usize = 3;

/// One line of the final standings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedFinish {
    /// 1-based rank
    pub rank: u32,
    pub racer_id: u32,
    pub elapsed_secs: f32,
}

/// Final race standings, fastest first
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RaceResults {
    pub standings: Vec<RankedFinish>,
}

impl RaceResults {
    /// Compile finish records into ranked standings.
    ///
    /// The sort is stable, so equal times keep their crossing order.
    pub fn compile(records: &[FinishRecord]) -> Self {
        let mut ordered: Vec<&FinishRecord> = records.iter().collect();
        ordered.sort_by(|a, b| a.elapsed_secs.partial_cmp(&b.elapsed_secs).unwrap());

        let standings = ordered
            .into_iter()
            .enumerate()
            .map(|(i, record)| RankedFinish {
                rank: (i + 1) as u32,
                racer_id: record.racer_id,
                elapsed_secs: record.elapsed_secs,
            })
            .collect();

        Self { standings }
    }

    /// Top-3 podium slots. With fewer than three finishers the trailing
    /// slots stay empty rather than reading past the standings.
    pub fn podium(&self) -> [Option<&RankedFinish>; PODIUM_SLOTS] {
        let mut slots = [None; PODIUM_SLOTS];
        for (slot, finish) in slots.iter_mut().zip(self.standings.iter()) {
            *slot = Some(finish);
        }
        slots
    }
}

impl fmt::Display for RaceResults {
    /// Render the full leaderboard as a plain text table
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:>4}  {:<10}  {:>8}", "Rank", "Racer", "Time")?;
        for finish in &self.standings {
            writeln!(
                f,
                "{:>4}  {:<10}  {:>7.2}s",
                finish.rank,
                format!("Racer {}", finish.racer_id + 1),
                finish.elapsed_secs,
            )?;
        }
        Ok(())
    }
}
