//! First-Come-First-Served.

use tracing::debug;

use super::{completion_record, stable_order, SchedulingStrategy, TickBudget};
use crate::error::SimulationError;
use crate::models::{ProcessTable, ScheduleResult};

/// First-Come-First-Served.
///
/// Runs processes to completion in arrival order. Equal arrivals keep
/// their input order. No timeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl SchedulingStrategy for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn run(&self, table: &ProcessTable) -> Result<ScheduleResult, SimulationError> {
        let budget = TickBudget::for_table(table, self.name())?;
        let processes = table.processes();
        let mut records = Vec::with_capacity(processes.len());
        let mut clock = 0;

        for i in stable_order(table, |p| p.arrival) {
            let process = &processes[i];
            let start = clock.max(process.arrival);
            let completion = budget.advance(start, process.burst)?;
            debug!(process = %process.id, start, completion, "dispatch");
            records.push(completion_record(process, completion));
            clock = completion;
        }

        Ok(ScheduleResult::without_timeline(records))
    }

    fn description(&self) -> &'static str {
        "First-Come-First-Served"
    }
}
