//! CPU scheduling strategies.
//!
//! Seven classical single-CPU disciplines behind one trait.
//!
//! | Strategy | Preemptive | Timeline | Selection key |
//! |----------|-----------|----------|---------------|
//! | [`Fcfs`] | no | no | arrival |
//! | [`Sjf`] | no | no | burst |
//! | [`Srtf`] | yes | yes | remaining burst |
//! | [`RoundRobin`] | quantum | yes | cyclic input order |
//! | [`PriorityNonPreemptive`] | no | no | priority |
//! | [`PriorityPreemptive`] | yes | yes | priority |
//! | [`Hrrn`] | no | no | response ratio |
//!
//! # Tie-breaking
//! Every selection is a linear scan that keeps the first best candidate
//! it sees. Which candidate is "first" depends on the strategy's scan
//! order and is documented on each strategy; it decides who wins ties.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Brinch Hansen (1971), "Short-term scheduling in multiprogramming systems" (HRRN)

mod engine;
mod fcfs;
mod hrrn;
mod priority;
mod round_robin;
mod sjf;
mod srtf;

pub use fcfs::Fcfs;
pub use hrrn::{response_ratio, Hrrn};
pub use priority::{PriorityNonPreemptive, PriorityPreemptive};
pub use round_robin::RoundRobin;
pub use sjf::Sjf;
pub use srtf::Srtf;

use std::fmt::Debug;

use crate::error::SimulationError;
use crate::models::{CompletionRecord, Process, ProcessTable, ScheduleResult};
use crate::validation::time_overflow;

/// A CPU scheduling discipline.
///
/// Implementations are pure: all run state is local to [`run`](Self::run),
/// so one strategy value may be shared across threads and reused.
pub trait SchedulingStrategy: Send + Sync + Debug {
    /// Short name (e.g., "FCFS", "SRTF").
    fn name(&self) -> &'static str;

    /// Simulates the table and returns one record per process.
    ///
    /// The table is assumed valid (see [`crate::validation`]). Malformed
    /// input that would keep the clock running forever ends in
    /// [`SimulationError::NonTerminating`].
    fn run(&self, table: &ProcessTable) -> Result<ScheduleResult, SimulationError>;

    /// Strategy description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Upper bound on the simulation clock.
///
/// A work-conserving single CPU idles only while nothing has arrived, so
/// every process finishes by `max_arrival + total_burst`. The clock may
/// reach that tick; any tick past it is [`SimulationError::NonTerminating`].
#[derive(Debug, Clone, Copy)]
pub(crate) struct TickBudget {
    discipline: &'static str,
    limit: i64,
}

impl TickBudget {
    /// Fails with `InvalidInput` when the bound itself overflows `i64`.
    pub(crate) fn for_table(
        table: &ProcessTable,
        discipline: &'static str,
    ) -> Result<Self, SimulationError> {
        let limit = table
            .horizon()
            .ok_or_else(|| SimulationError::InvalidInput(vec![time_overflow(table)]))?;
        Ok(Self { discipline, limit })
    }

    #[inline]
    pub(crate) fn check(&self, tick: i64) -> Result<(), SimulationError> {
        if tick > self.limit {
            return Err(self.exceeded());
        }
        Ok(())
    }

    /// `tick + ticks`, checked against the bound.
    #[inline]
    pub(crate) fn advance(&self, tick: i64, ticks: i64) -> Result<i64, SimulationError> {
        let next = tick.checked_add(ticks).ok_or_else(|| self.exceeded())?;
        self.check(next)?;
        Ok(next)
    }

    /// Moves an idle clock to the next pending arrival. With nothing left
    /// to arrive the clock could never make progress again.
    pub(crate) fn idle_until(&self, next_arrival: Option<i64>) -> Result<i64, SimulationError> {
        let next = next_arrival.ok_or_else(|| self.exceeded())?;
        self.check(next)?;
        Ok(next)
    }

    fn exceeded(&self) -> SimulationError {
        SimulationError::NonTerminating {
            discipline: self.discipline,
            limit: self.limit,
        }
    }
}

/// Earliest arrival strictly after `now` among the positions still pending.
pub(crate) fn next_arrival<F>(processes: &[Process], now: i64, mut pending: F) -> Option<i64>
where
    F: FnMut(usize) -> bool,
{
    processes
        .iter()
        .enumerate()
        .filter(|&(i, p)| p.arrival > now && pending(i))
        .map(|(_, p)| p.arrival)
        .min()
}

/// Preallocation for a timeline; long runs grow the vector as they go.
pub(crate) fn timeline_capacity(table: &ProcessTable) -> usize {
    const MAX_PREALLOC: i64 = 1 << 12;
    table.total_burst().clamp(0, MAX_PREALLOC) as usize
}

pub(crate) fn completion_record(process: &Process, completion: i64) -> CompletionRecord {
    CompletionRecord {
        process_id: process.id.clone(),
        arrival: process.arrival,
        burst: process.burst,
        completion,
        priority: process.priority,
    }
}

/// Index of the first candidate with the smallest key.
pub(crate) fn first_min_by_key<K, F>(
    candidates: impl IntoIterator<Item = usize>,
    mut key: F,
) -> Option<usize>
where
    K: Ord,
    F: FnMut(usize) -> K,
{
    let mut best: Option<(usize, K)> = None;
    for i in candidates {
        let k = key(i);
        let better = match &best {
            Some((_, best_key)) => k < *best_key,
            None => true,
        };
        if better {
            best = Some((i, k));
        }
    }
    best.map(|(i, _)| i)
}

/// Input positions stably sorted by `key`; equal keys keep input order.
pub(crate) fn stable_order<K, F>(table: &ProcessTable, key: F) -> Vec<usize>
where
    K: Ord,
    F: Fn(&Process) -> K,
{
    let processes = table.processes();
    let mut order: Vec<usize> = (0..processes.len()).collect();
    order.sort_by_key(|&i| key(&processes[i]));
    order
}
