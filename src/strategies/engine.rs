//! Shared simulation loops.
//!
//! Two clock models cover six of the seven strategies:
//!
//! - **Run-to-completion**: at each decision point pick one ready
//!   process and run it to the end (SJF, Priority-NP, HRRN).
//! - **Tick-driven**: every tick pick one eligible process and run it
//!   for that tick only (SRTF, Priority-P).
//!
//! When nothing is ready both jump the clock to the next pending arrival.

use tracing::{debug, trace};

use super::{completion_record, next_arrival, timeline_capacity, TickBudget};
use crate::error::SimulationError;
use crate::models::{CompletionRecord, ProcessTable, ScheduleResult, TimelineEvent};

/// Runs a non-preemptive schedule.
///
/// `order` fixes the order of the ready list handed to `select`; `select`
/// receives the ready positions and the current time and returns the
/// position to run.
pub(crate) fn run_to_completion<F>(
    table: &ProcessTable,
    order: &[usize],
    budget: TickBudget,
    mut select: F,
) -> Result<Vec<CompletionRecord>, SimulationError>
where
    F: FnMut(&[usize], i64) -> usize,
{
    let processes = table.processes();
    let mut scheduled = vec![false; processes.len()];
    let mut records = Vec::with_capacity(processes.len());
    let mut ready = Vec::with_capacity(processes.len());
    let mut time = 0;

    while records.len() < processes.len() {
        budget.check(time)?;

        ready.clear();
        ready.extend(
            order
                .iter()
                .copied()
                .filter(|&i| !scheduled[i] && processes[i].arrival <= time),
        );
        if ready.is_empty() {
            let next = budget.idle_until(next_arrival(processes, time, |i| !scheduled[i]))?;
            trace!(from = time, to = next, "idle");
            time = next;
            continue;
        }

        let chosen = select(&ready, time);
        let process = &processes[chosen];
        let start = time.max(process.arrival);
        let completion = budget.advance(start, process.burst)?;
        debug!(process = %process.id, start, completion, "dispatch");

        records.push(completion_record(process, completion));
        scheduled[chosen] = true;
        time = completion;
    }

    Ok(records)
}

/// Runs a preemptive schedule one tick at a time.
///
/// Eligible processes (arrived, work left) are scanned in input order;
/// the first one with the smallest `key(position, remaining)` runs.
pub(crate) fn run_tick_driven<K, F>(
    table: &ProcessTable,
    budget: TickBudget,
    mut key: F,
) -> Result<ScheduleResult, SimulationError>
where
    K: Ord,
    F: FnMut(usize, i64) -> K,
{
    let processes = table.processes();
    let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst).collect();
    let mut records = Vec::with_capacity(processes.len());
    let mut timeline = Vec::with_capacity(timeline_capacity(table));
    let mut running: Option<usize> = None;
    let mut tick = 0;

    while records.len() < processes.len() {
        budget.check(tick)?;

        let eligible = (0..processes.len())
            .filter(|&i| processes[i].arrival <= tick && remaining[i] > 0);
        let Some(chosen) = super::first_min_by_key(eligible, |i| key(i, remaining[i])) else {
            let next = budget.idle_until(next_arrival(processes, tick, |i| remaining[i] > 0))?;
            trace!(from = tick, to = next, "idle");
            tick = next;
            continue;
        };

        let process = &processes[chosen];
        if running != Some(chosen) {
            debug!(tick, process = %process.id, remaining = remaining[chosen], "switch");
            running = Some(chosen);
        }

        let next = budget.advance(tick, 1)?;
        timeline.push(TimelineEvent::new(tick, &process.id));
        remaining[chosen] -= 1;
        if remaining[chosen] == 0 {
            records.push(completion_record(process, next));
        }
        tick = next;
    }

    Ok(ScheduleResult::new(records, timeline))
}
