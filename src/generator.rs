//! Random workload generation.
//!
//! Produces valid process tables within configurable bounds, e.g. for
//! comparing disciplines over many workloads or for property checks.
//! IDs are assigned as `P1`, `P2`, ... in input order.

use rand::Rng;

use crate::models::{Process, ProcessTable};

/// Random process-table generator.
///
/// Defaults mirror the usual interactive bounds: 1–10 processes,
/// arrivals in `0..=10`, bursts in `1..=10`, priorities in `1..=5`.
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    min_processes: usize,
    max_processes: usize,
    max_arrival: i64,
    max_burst: i64,
    max_priority: i32,
}

impl WorkloadGenerator {
    /// Creates a generator with default bounds.
    pub fn new() -> Self {
        Self {
            min_processes: 1,
            max_processes: 10,
            max_arrival: 10,
            max_burst: 10,
            max_priority: 5,
        }
    }

    /// Sets the process count range (inclusive). Clamped to at least 1.
    pub fn with_process_count(mut self, min: usize, max: usize) -> Self {
        self.min_processes = min.max(1);
        self.max_processes = max.max(self.min_processes);
        self
    }

    /// Sets the latest arrival tick. Clamped to at least 0.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival.max(0);
        self
    }

    /// Sets the longest burst. Clamped to at least 1.
    pub fn with_max_burst(mut self, max_burst: i64) -> Self {
        self.max_burst = max_burst.max(1);
        self
    }

    /// Sets the largest priority value. Clamped to at least 1.
    pub fn with_max_priority(mut self, max_priority: i32) -> Self {
        self.max_priority = max_priority.max(1);
        self
    }

    /// Generates a table. Every process gets a priority, so the table is
    /// valid for all disciplines.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> ProcessTable {
        let count = rng.random_range(self.min_processes..=self.max_processes);
        (1..=count)
            .map(|i| {
                Process::new(
                    format!("P{i}"),
                    rng.random_range(0..=self.max_arrival),
                    rng.random_range(1..=self.max_burst),
                )
                .with_priority(rng.random_range(1..=self.max_priority))
            })
            .collect::<Vec<_>>()
            .into()
    }
}

impl Default for WorkloadGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::Discipline;
    use crate::validation::validate_input;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_tables_are_valid() {
        let mut rng = StdRng::seed_from_u64(42);
        let generator = WorkloadGenerator::new();
        for _ in 0..50 {
            let table = generator.generate(&mut rng);
            assert!((1..=10).contains(&table.len()));
            for d in Discipline::ALL {
                assert!(validate_input(&table, d, Some(1)).is_ok());
            }
        }
    }

    #[test]
    fn test_bounds_respected() {
        let mut rng = StdRng::seed_from_u64(1);
        let generator = WorkloadGenerator::new()
            .with_process_count(4, 4)
            .with_max_arrival(0)
            .with_max_burst(2)
            .with_max_priority(1);
        let table = generator.generate(&mut rng);
        assert_eq!(table.len(), 4);
        assert_eq!(table.processes()[3].id, "P4");
        for p in &table {
            assert_eq!(p.arrival, 0);
            assert!((1..=2).contains(&p.burst));
            assert_eq!(p.priority, Some(1));
        }
    }

    #[test]
    fn test_same_seed_same_table() {
        let generator = WorkloadGenerator::new();
        let a = generator.generate(&mut StdRng::seed_from_u64(9));
        let b = generator.generate(&mut StdRng::seed_from_u64(9));
        assert_eq!(a, b);
    }

    #[test]
    fn test_clamps_degenerate_bounds() {
        let mut rng = StdRng::seed_from_u64(5);
        let table = WorkloadGenerator::new()
            .with_process_count(0, 0)
            .with_max_burst(0)
            .generate(&mut rng);
        assert_eq!(table.len(), 1);
        assert_eq!(table.processes()[0].burst, 1);
    }
}
