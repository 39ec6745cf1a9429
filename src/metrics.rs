//! Schedule metrics.
//!
//! Derives per-process and aggregate timing figures from a finished
//! schedule. Nothing here is stored back on the processes.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround | completion − arrival |
//! | Waiting | turnaround − burst |
//! | Makespan | Latest completion |
//! | CPU busy | Sum of bursts |
//! | CPU utilization | busy / makespan |

use serde::{Deserialize, Serialize};

use crate::models::ScheduleResult;

/// Timing figures for one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMetrics {
    /// Process ID.
    pub process_id: String,
    /// completion − arrival.
    pub turnaround: i64,
    /// turnaround − burst.
    pub waiting: i64,
}

/// Aggregate schedule metrics.
///
/// Averages are `NaN` for an empty result; callers guard against
/// zero processes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleMetrics {
    /// Per-process figures, in record order.
    pub per_process: Vec<ProcessMetrics>,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Largest waiting time (0 if empty).
    pub max_waiting: i64,
    /// Latest completion tick.
    pub makespan: i64,
    /// Total CPU work (sum of bursts).
    pub cpu_busy: i64,
    /// Busy fraction of `[0, makespan)` (0.0 if makespan is 0).
    pub cpu_utilization: f64,
}

impl ScheduleMetrics {
    /// Computes metrics from a schedule result.
    pub fn calculate(result: &ScheduleResult) -> Self {
        let per_process: Vec<ProcessMetrics> = result
            .records
            .iter()
            .map(|r| ProcessMetrics {
                process_id: r.process_id.clone(),
                turnaround: r.turnaround(),
                waiting: r.waiting(),
            })
            .collect();

        let count = per_process.len() as f64;
        // Summed as f64: several near-horizon turnarounds overflow i64.
        let total_turnaround: f64 = per_process.iter().map(|m| m.turnaround as f64).sum();
        let total_waiting: f64 = per_process.iter().map(|m| m.waiting as f64).sum();
        let max_waiting = per_process.iter().map(|m| m.waiting).max().unwrap_or(0);

        let makespan = result.makespan();
        let cpu_busy: i64 = result.records.iter().map(|r| r.burst).sum();
        let cpu_utilization = if makespan <= 0 {
            0.0
        } else {
            cpu_busy as f64 / makespan as f64
        };

        Self {
            per_process,
            // 0/0 yields NaN for an empty result.
            avg_turnaround: total_turnaround / count,
            avg_waiting: total_waiting / count,
            max_waiting,
            makespan,
            cpu_busy,
            cpu_utilization,
        }
    }

    /// Figures for one process.
    pub fn for_process(&self, process_id: &str) -> Option<&ProcessMetrics> {
        self.per_process.iter().find(|m| m.process_id == process_id)
    }

    /// Whether every turnaround and waiting time is non-negative.
    pub fn is_non_negative(&self) -> bool {
        self.per_process
            .iter()
            .all(|m| m.turnaround >= 0 && m.waiting >= 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CompletionRecord;

    fn record(id: &str, arrival: i64, burst: i64, completion: i64) -> CompletionRecord {
        CompletionRecord {
            process_id: id.into(),
            arrival,
            burst,
            completion,
            priority: None,
        }
    }

    #[test]
    fn test_metrics_basic() {
        let result = ScheduleResult::without_timeline(vec![
            record("P1", 0, 5, 5),
            record("P2", 1, 3, 8),
            record("P3", 2, 8, 16),
        ]);
        let m = ScheduleMetrics::calculate(&result);

        assert_eq!(m.for_process("P2").map(|p| (p.turnaround, p.waiting)), Some((7, 4)));
        // (5 + 7 + 14) / 3
        assert!((m.avg_turnaround - 26.0 / 3.0).abs() < 1e-10);
        // (0 + 4 + 6) / 3
        assert!((m.avg_waiting - 10.0 / 3.0).abs() < 1e-10);
        assert_eq!(m.max_waiting, 6);
        assert_eq!(m.makespan, 16);
        assert_eq!(m.cpu_busy, 16);
        assert!((m.cpu_utilization - 1.0).abs() < 1e-10);
        assert!(m.is_non_negative());
    }

    #[test]
    fn test_metrics_utilization_with_idle() {
        let result = ScheduleResult::without_timeline(vec![
            record("P1", 0, 2, 2),
            record("P2", 6, 2, 8),
        ]);
        let m = ScheduleMetrics::calculate(&result);
        assert!((m.cpu_utilization - 0.5).abs() < 1e-10);
        assert!((m.avg_waiting - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_empty() {
        let m = ScheduleMetrics::calculate(&ScheduleResult::default());
        assert!(m.avg_turnaround.is_nan());
        assert!(m.avg_waiting.is_nan());
        assert_eq!(m.makespan, 0);
        assert_eq!(m.max_waiting, 0);
        assert!((m.cpu_utilization - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_metrics_large_turnarounds() {
        let half = i64::MAX / 2;
        let result = ScheduleResult::without_timeline(vec![
            record("P1", 0, half, half),
            record("P2", 0, half, 2 * half),
        ]);
        let m = ScheduleMetrics::calculate(&result);
        assert!(m.avg_turnaround.is_finite());
        assert!((m.avg_turnaround - 1.5 * half as f64).abs() / m.avg_turnaround < 1e-10);
        assert_eq!(m.max_waiting, half);
    }

    #[test]
    fn test_metrics_detects_negative() {
        let result = ScheduleResult::without_timeline(vec![record("P1", 3, 5, 4)]);
        assert!(!ScheduleMetrics::calculate(&result).is_non_negative());
    }
}
