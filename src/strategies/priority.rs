//! Priority scheduling, non-preemptive and preemptive.
//!
//! Lower numeric priority = more important.

use super::engine::{run_tick_driven, run_to_completion};
use super::{first_min_by_key, stable_order, SchedulingStrategy, TickBudget};
use crate::error::SimulationError;
use crate::models::{ProcessTable, ScheduleResult};

/// Priority scheduling, non-preemptive.
///
/// The ready list is ordered by (arrival, priority), stable on input
/// order. At each decision point the first ready process with the
/// smallest priority value runs to completion.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityNonPreemptive;

impl SchedulingStrategy for PriorityNonPreemptive {
    fn name(&self) -> &'static str {
        "PRIORITY-NP"
    }

    fn run(&self, table: &ProcessTable) -> Result<ScheduleResult, SimulationError> {
        let processes = table.processes();
        let order = stable_order(table, |p| (p.arrival, p.priority_key()));
        let records = run_to_completion(
            table,
            &order,
            TickBudget::for_table(table, self.name())?,
            |ready, _| {
                first_min_by_key(ready.iter().copied(), |i| processes[i].priority_key())
                    .unwrap_or(ready[0])
            },
        )?;
        Ok(ScheduleResult::without_timeline(records))
    }

    fn description(&self) -> &'static str {
        "Priority (non-preemptive)"
    }
}

/// Priority scheduling, preemptive.
///
/// Every tick the arrived process with the smallest priority value runs;
/// equal priorities go to the lowest input position. Emits a timeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityPreemptive;

impl SchedulingStrategy for PriorityPreemptive {
    fn name(&self) -> &'static str {
        "PRIORITY-P"
    }

    fn run(&self, table: &ProcessTable) -> Result<ScheduleResult, SimulationError> {
        let processes = table.processes();
        run_tick_driven(
            table,
            TickBudget::for_table(table, self.name())?,
            |i, _| processes[i].priority_key(),
        )
    }

    fn description(&self) -> &'static str {
        "Priority (preemptive)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_np_runs_to_completion() {
        let table = ProcessTable::from_prioritized(&[
            ("P1", 0, 4, 3),
            ("P2", 1, 2, 1),
            ("P3", 2, 1, 2),
        ]);
        let result = PriorityNonPreemptive.run(&table).unwrap();
        assert_eq!(result.completion_order(), vec!["P1", "P2", "P3"]);
        assert_eq!(result.completion_of("P1"), Some(4));
        assert_eq!(result.completion_of("P2"), Some(6));
        assert_eq!(result.completion_of("P3"), Some(7));
        assert_eq!(result.record("P2").and_then(|r| r.priority), Some(1));
        assert!(result.timeline.is_empty());
    }

    #[test]
    fn test_priority_np_equal_priority_prefers_earlier_arrival() {
        let table = ProcessTable::from_prioritized(&[
            ("P0", 0, 3, 1),
            ("P1", 2, 1, 5),
            ("P2", 1, 1, 5),
        ]);
        let result = PriorityNonPreemptive.run(&table).unwrap();
        assert_eq!(result.completion_order(), vec!["P0", "P2", "P1"]);
    }

    #[test]
    fn test_priority_p_preempts() {
        let table = ProcessTable::from_prioritized(&[("P1", 0, 4, 3), ("P2", 1, 2, 1)]);
        let result = PriorityPreemptive.run(&table).unwrap();
        let ids: Vec<&str> = result.timeline.iter().map(|e| e.process_id.as_str()).collect();
        assert_eq!(ids, vec!["P1", "P2", "P2", "P1", "P1", "P1"]);
        assert_eq!(result.completion_of("P2"), Some(3));
        assert_eq!(result.completion_of("P1"), Some(6));
        assert_eq!(result.record("P1").and_then(|r| r.priority), Some(3));
    }

    #[test]
    fn test_priority_p_tie_goes_to_lower_index() {
        let table = ProcessTable::from_prioritized(&[("P1", 1, 2, 2), ("P2", 0, 2, 2)]);
        let result = PriorityPreemptive.run(&table).unwrap();
        let ids: Vec<&str> = result.timeline.iter().map(|e| e.process_id.as_str()).collect();
        // P2 alone at tick 0, then P1 (lower index) wins the tie from tick 1.
        assert_eq!(ids, vec!["P2", "P1", "P1", "P2"]);
    }
}
