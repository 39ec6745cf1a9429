//! Round Robin with a fixed time quantum.
//!
//! # Ready-queue semantics
//! Processes are visited in a fixed cycle equal to their input order.
//! Each sweep visits every unfinished process once; one that has not
//! arrived when its slot comes up is skipped until the next sweep. A
//! newly arrived process is never inserted ahead of its slot. This is
//! not the textbook FIFO re-queue, and results differ from it whenever
//! arrivals are staggered.
//!
//! When a whole sweep finds nothing runnable the clock jumps to the next
//! pending arrival.

use tracing::{debug, trace};

use super::{completion_record, next_arrival, timeline_capacity, SchedulingStrategy, TickBudget};
use crate::error::SimulationError;
use crate::models::{ProcessTable, ScheduleResult, TimelineEvent};

/// Round Robin.
///
/// Each turn runs `min(remaining, quantum)` ticks. Emits a timeline.
#[derive(Debug, Clone, Copy)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a Round Robin strategy with the given quantum (ticks).
    pub fn new(quantum: i64) -> Self {
        Self { quantum }
    }

    /// Time quantum in ticks.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

impl SchedulingStrategy for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn run(&self, table: &ProcessTable) -> Result<ScheduleResult, SimulationError> {
        let budget = TickBudget::for_table(table, self.name())?;
        let processes = table.processes();
        let mut remaining: Vec<i64> = processes.iter().map(|p| p.burst).collect();
        let mut finished = vec![false; processes.len()];
        let mut records = Vec::with_capacity(processes.len());
        let mut timeline = Vec::with_capacity(timeline_capacity(table));
        let mut clock = 0;

        while records.len() < processes.len() {
            budget.check(clock)?;
            let mut progressed = false;

            for (i, process) in processes.iter().enumerate() {
                if finished[i] || process.arrival > clock {
                    continue;
                }

                let slice = remaining[i].min(self.quantum).max(0);
                debug!(process = %process.id, start = clock, slice, "turn");
                let end = budget.advance(clock, slice)?;
                timeline.extend((clock..end).map(|t| TimelineEvent::new(t, &process.id)));
                clock = end;
                remaining[i] -= slice;
                progressed |= slice > 0;

                if remaining[i] <= 0 {
                    finished[i] = true;
                    records.push(completion_record(process, clock));
                    progressed = true;
                }
            }

            if !progressed {
                let next = budget.idle_until(next_arrival(processes, clock, |i| !finished[i]))?;
                trace!(from = clock, to = next, "idle");
                clock = next;
            }
        }

        Ok(ScheduleResult::new(records, timeline))
    }

    fn description(&self) -> &'static str {
        "Round Robin"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(result: &ScheduleResult) -> Vec<&str> {
        result.timeline.iter().map(|e| e.process_id.as_str()).collect()
    }

    #[test]
    fn test_rr_quantum_slicing() {
        let table = ProcessTable::from_tuples(&[("P1", 0, 5), ("P2", 0, 3)]);
        let result = RoundRobin::new(2).run(&table).unwrap();

        assert_eq!(result.busy_ticks(), 8);
        assert_eq!(
            ids(&result),
            vec!["P1", "P1", "P2", "P2", "P1", "P1", "P2", "P1"]
        );
        assert_eq!(result.completion_of("P2"), Some(7));
        assert_eq!(result.completion_of("P1"), Some(8));
        assert_eq!(result.completion_order(), vec!["P2", "P1"]);
        assert!(result.violations(&table).is_empty());
    }

    #[test]
    fn test_rr_record_keeps_real_burst() {
        let table = ProcessTable::from_tuples(&[("P1", 0, 3)]);
        let result = RoundRobin::new(2).run(&table).unwrap();
        let record = result.record("P1").unwrap();
        assert_eq!(record.burst, 3);
        assert_eq!(record.waiting(), 0);
    }

    #[test]
    fn test_rr_fixed_cycle_order() {
        // P2 arrives while P1 holds the CPU. A FIFO re-queue would run P3
        // next; the fixed cycle reaches P2's slot first.
        let table = ProcessTable::from_tuples(&[("P1", 0, 6), ("P2", 1, 2), ("P3", 0, 2)]);
        let result = RoundRobin::new(2).run(&table).unwrap();
        assert_eq!(
            ids(&result),
            vec!["P1", "P1", "P2", "P2", "P3", "P3", "P1", "P1", "P1", "P1"]
        );
        assert_eq!(result.completion_of("P2"), Some(4));
        assert_eq!(result.completion_of("P3"), Some(6));
        assert_eq!(result.completion_of("P1"), Some(10));
    }

    #[test]
    fn test_rr_late_slot_waits_for_next_sweep() {
        // P1 is visited at clock 0 before it arrives; P2 runs, then the next
        // sweep picks P1 up.
        let table = ProcessTable::from_tuples(&[("P1", 1, 1), ("P2", 0, 3)]);
        let result = RoundRobin::new(3).run(&table).unwrap();
        assert_eq!(ids(&result), vec!["P2", "P2", "P2", "P1"]);
        assert_eq!(result.completion_of("P1"), Some(4));
    }

    #[test]
    fn test_rr_idles_before_first_arrival() {
        let table = ProcessTable::from_tuples(&[("P1", 3, 2)]);
        let result = RoundRobin::new(1).run(&table).unwrap();
        let ticks: Vec<i64> = result.timeline.iter().map(|e| e.tick).collect();
        assert_eq!(ticks, vec![3, 4]);
        assert_eq!(result.completion_of("P1"), Some(5));
    }

    #[test]
    fn test_rr_jumps_long_idle_gaps() {
        let table = ProcessTable::from_tuples(&[("P1", 0, 1), ("P2", 1_000_000_000, 3)]);
        let result = RoundRobin::new(2).run(&table).unwrap();
        let ticks: Vec<i64> = result.timeline.iter().map(|e| e.tick).collect();
        assert_eq!(ticks, vec![0, 1_000_000_000, 1_000_000_001, 1_000_000_002]);
        assert_eq!(result.completion_of("P2"), Some(1_000_000_003));
    }

    #[test]
    fn test_rr_zero_quantum_hits_tick_bound() {
        let table = ProcessTable::from_tuples(&[("P1", 0, 2)]);
        assert!(matches!(
            RoundRobin::new(0).run(&table),
            Err(SimulationError::NonTerminating { discipline: "RR", .. })
        ));
    }
}
