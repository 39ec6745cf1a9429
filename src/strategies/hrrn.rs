//! Highest-Response-Ratio-Next.
//!
//! Response ratio = (waiting so far + burst) / burst. Short jobs start
//! with an advantage and long jobs age their way up, so nothing starves.
//!
//! # Reference
//! Brinch Hansen (1971), "Short-term scheduling in multiprogramming systems"

use super::engine::run_to_completion;
use super::{SchedulingStrategy, TickBudget};
use crate::error::SimulationError;
use crate::models::{Process, ProcessTable, ScheduleResult};

/// Response ratio of `process` at time `now`.
///
/// Returns `f64::INFINITY` for a zero burst.
pub fn response_ratio(process: &Process, now: i64) -> f64 {
    if process.burst <= 0 {
        return f64::INFINITY;
    }
    let waited = now.saturating_sub(process.arrival);
    waited.saturating_add(process.burst) as f64 / process.burst as f64
}

/// Highest-Response-Ratio-Next, non-preemptive.
///
/// The ready list follows input order. The first process with the
/// highest ratio runs to completion; ratios are compared exactly by
/// cross-multiplication, so mathematically equal ratios always tie.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hrrn;

impl SchedulingStrategy for Hrrn {
    fn name(&self) -> &'static str {
        "HRRN"
    }

    fn run(&self, table: &ProcessTable) -> Result<ScheduleResult, SimulationError> {
        let processes = table.processes();
        let order: Vec<usize> = (0..processes.len()).collect();
        let records = run_to_completion(
            table,
            &order,
            TickBudget::for_table(table, self.name())?,
            |ready, now| {
                let mut best = ready[0];
                for &i in &ready[1..] {
                    if ratio_exceeds(&processes[i], &processes[best], now) {
                        best = i;
                    }
                }
                best
            },
        )?;
        Ok(ScheduleResult::without_timeline(records))
    }

    fn description(&self) -> &'static str {
        "Highest Response Ratio Next"
    }
}

/// Whether `a` has a strictly higher response ratio than `b` at `now`.
fn ratio_exceeds(a: &Process, b: &Process, now: i64) -> bool {
    let numerator = |p: &Process| i128::from(now) - i128::from(p.arrival) + i128::from(p.burst);
    numerator(a) * i128::from(b.burst) > numerator(b) * i128::from(a.burst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_ratio() {
        let p = Process::new("P1", 1, 6);
        assert!((response_ratio(&p, 3) - 8.0 / 6.0).abs() < 1e-10);
        assert!((response_ratio(&p, 1) - 1.0).abs() < 1e-10);
        assert!(response_ratio(&Process::new("Z", 0, 0), 5).is_infinite());
    }

    #[test]
    fn test_hrrn_prefers_highest_ratio() {
        // At t=3: P1 = (2+6)/6 = 1.33, P2 = (1+2)/2 = 1.5.
        let table = ProcessTable::from_tuples(&[("P0", 0, 3), ("P1", 1, 6), ("P2", 2, 2)]);
        let result = Hrrn.run(&table).unwrap();
        assert_eq!(result.completion_order(), vec!["P0", "P2", "P1"]);
        assert_eq!(result.completion_of("P2"), Some(5));
        assert_eq!(result.completion_of("P1"), Some(11));
        assert!(result.timeline.is_empty());
    }

    #[test]
    fn test_hrrn_equal_ratio_goes_to_earlier_entry() {
        // At t=4: A = (4+4)/4 = 2, B = (2+2)/2 = 2.
        let table = ProcessTable::from_tuples(&[("P0", 0, 4), ("A", 0, 4), ("B", 2, 2)]);
        let result = Hrrn.run(&table).unwrap();
        assert_eq!(result.completion_order(), vec!["P0", "A", "B"]);

        let swapped = ProcessTable::from_tuples(&[("P0", 0, 4), ("B", 2, 2), ("A", 0, 4)]);
        let result = Hrrn.run(&swapped).unwrap();
        assert_eq!(result.completion_order(), vec!["P0", "B", "A"]);
    }

    #[test]
    fn test_hrrn_ready_list_is_input_order() {
        // Everything arrives at 0 with ratio 1: plain input order.
        let table = ProcessTable::from_tuples(&[("P3", 0, 5), ("P1", 0, 1), ("P2", 0, 3)]);
        let result = Hrrn.run(&table).unwrap();
        assert_eq!(result.completion_order()[0], "P3");
    }

    #[test]
    fn test_hrrn_idles_until_arrival() {
        let table = ProcessTable::from_tuples(&[("P1", 4, 2)]);
        let result = Hrrn.run(&table).unwrap();
        assert_eq!(result.completion_of("P1"), Some(6));
    }

    #[test]
    fn test_hrrn_jumps_long_idle_gaps() {
        let table = ProcessTable::from_tuples(&[("P1", 0, 1), ("P2", 1_000_000_000, 2)]);
        let result = Hrrn.run(&table).unwrap();
        assert_eq!(result.completion_of("P1"), Some(1));
        assert_eq!(result.completion_of("P2"), Some(1_000_000_002));
    }
}
