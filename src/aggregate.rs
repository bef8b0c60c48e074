use crate::{Snapshot, Status};
use serde::Serialize;

/// Aggregate S/I/R tallies for one simulated day. Day indices are 1-based
/// and assigned in emission order; the three counts always sum to the node
/// count.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DayCount {
    pub day: usize,
    pub susceptible: usize,
    pub infected: usize,
    pub recovered: usize,
}

impl DayCount {
    /// Tallies one snapshot. Pure; `day` is whatever the caller says it is.
    #[must_use]
    pub fn tally(day: usize, snapshot: &Snapshot) -> DayCount {
        let mut counts = DayCount {
            day,
            susceptible: 0,
            infected: 0,
            recovered: 0,
        };
        for (_, status) in snapshot.iter() {
            match status {
                Status::Susceptible => counts.susceptible += 1,
                Status::Infected => counts.infected += 1,
                Status::Recovered => counts.recovered += 1,
            }
        }
        counts
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.susceptible + self.infected + self.recovered
    }
}

/// Maps a run's snapshot sequence to its per-day count sequence.
#[must_use]
pub fn daily_counts(snapshots: &[Snapshot]) -> Vec<DayCount> {
    snapshots
        .iter()
        .enumerate()
        .map(|(index, snapshot)| DayCount::tally(index + 1, snapshot))
        .collect()
}
