//! Shortest-Job-First (non-preemptive).

use super::engine::run_to_completion;
use super::{first_min_by_key, stable_order, SchedulingStrategy, TickBudget};
use crate::error::SimulationError;
use crate::models::{ProcessTable, ScheduleResult};

/// Shortest-Job-First, non-preemptive.
///
/// The ready list is ordered by (arrival, burst), stable on input order.
/// At each decision point the first ready process with the smallest
/// burst runs to completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl SchedulingStrategy for Sjf {
    fn name(&self) -> &'static str {
        "SJF-NP"
    }

    fn run(&self, table: &ProcessTable) -> Result<ScheduleResult, SimulationError> {
        let processes = table.processes();
        let order = stable_order(table, |p| (p.arrival, p.burst));
        let records = run_to_completion(
            table,
            &order,
            TickBudget::for_table(table, self.name())?,
            |ready, _| {
                // Ready is never empty here.
                first_min_by_key(ready.iter().copied(), |i| processes[i].burst).unwrap_or(ready[0])
            },
        )?;
        Ok(ScheduleResult::without_timeline(records))
    }

    fn description(&self) -> &'static str {
        "Shortest Job First (non-preemptive)"
    }
}
