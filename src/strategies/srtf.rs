//! Shortest-Remaining-Time-First (preemptive SJF).

use super::engine::run_tick_driven;
use super::{SchedulingStrategy, TickBudget};
use crate::error::SimulationError;
use crate::models::{ProcessTable, ScheduleResult};

/// Shortest-Remaining-Time-First.
///
/// Every tick the arrived process with the least remaining work runs;
/// on equal remaining work the lowest input position wins. Emits a
/// timeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct Srtf;

impl SchedulingStrategy for Srtf {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn run(&self, table: &ProcessTable) -> Result<ScheduleResult, SimulationError> {
        run_tick_driven(
            table,
            TickBudget::for_table(table, self.name())?,
            |_, remaining| remaining,
        )
    }

    fn description(&self) -> &'static str {
        "Shortest Remaining Time First (preemptive)"
    }
}
