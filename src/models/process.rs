//! Process model and the process table.
//!
//! A process is a unit of CPU work with a declared arrival tick and a
//! total burst. The process table is the ordered, read-only input of a
//! simulation run; its order is the "input order" that every tie-break
//! in the strategies falls back to.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

/// A process to be scheduled on a single CPU.
///
/// # Time Representation
/// All times are integer ticks relative to the simulation start (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (e.g. "P1").
    pub id: String,
    /// Tick at which the process becomes eligible to run.
    pub arrival: i64,
    /// Total CPU ticks required.
    pub burst: i64,
    /// Scheduling priority (lower = more important). Only read by the
    /// priority disciplines.
    pub priority: Option<i32>,
}

impl Process {
    /// Creates a process without a priority.
    pub fn new(id: impl Into<String>, arrival: i64, burst: i64) -> Self {
        Self {
            id: id.into(),
            arrival,
            burst,
            priority: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Priority used for selection. Validation guarantees presence for the
    /// priority disciplines; a missing value sorts last.
    #[inline]
    pub(crate) fn priority_key(&self) -> i32 {
        self.priority.unwrap_or(i32::MAX)
    }
}

/// Ordered, immutable collection of processes for one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProcessTable {
    processes: Vec<Process>,
}

impl ProcessTable {
    /// Creates a table from processes in input order.
    pub fn new(processes: Vec<Process>) -> Self {
        Self { processes }
    }

    /// Creates a table from `(id, arrival, burst)` tuples.
    pub fn from_tuples(entries: &[(&str, i64, i64)]) -> Self {
        Self::new(
            entries
                .iter()
                .map(|&(id, arrival, burst)| Process::new(id, arrival, burst))
                .collect(),
        )
    }

    /// Creates a table from `(id, arrival, burst, priority)` tuples.
    pub fn from_prioritized(entries: &[(&str, i64, i64, i32)]) -> Self {
        Self::new(
            entries
                .iter()
                .map(|&(id, arrival, burst, priority)| {
                    Process::new(id, arrival, burst).with_priority(priority)
                })
                .collect(),
        )
    }

    /// Processes in input order.
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    /// Iterates processes in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Process> {
        self.processes.iter()
    }

    /// Looks up a process by ID.
    pub fn get(&self, id: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Number of processes.
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    /// Whether the table has no processes.
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    /// Sum of all bursts (total CPU work). Saturates at `i64::MAX`.
    pub fn total_burst(&self) -> i64 {
        self.processes
            .iter()
            .fold(0i64, |acc, p| acc.saturating_add(p.burst))
    }

    /// Latest arrival tick (0 for an empty table).
    pub fn max_arrival(&self) -> i64 {
        self.processes.iter().map(|p| p.arrival).max().unwrap_or(0)
    }

    /// Latest tick a work-conserving CPU can still be busy:
    /// `max_arrival + total_burst`, with negative values counted as zero.
    ///
    /// Returns `None` when the sum does not fit in an `i64` tick.
    pub fn horizon(&self) -> Option<i64> {
        let work = self
            .processes
            .iter()
            .try_fold(0i64, |acc, p| acc.checked_add(p.burst.max(0)))?;
        self.max_arrival().max(0).checked_add(work)
    }
}

impl<'a> IntoIterator for &'a ProcessTable {
    type Item = &'a Process;
    type IntoIter = std::slice::Iter<'a, Process>;

    fn into_iter(self) -> Self::IntoIter {
        self.processes.iter()
    }
}

impl From<Vec<Process>> for ProcessTable {
    fn from(processes: Vec<Process>) -> Self {
        Self::new(processes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_builder() {
        let p = Process::new("P1", 3, 7).with_priority(2);
        assert_eq!(p.id, "P1");
        assert_eq!(p.arrival, 3);
        assert_eq!(p.burst, 7);
        assert_eq!(p.priority, Some(2));
        assert_eq!(p.priority_key(), 2);
    }

    #[test]
    fn test_missing_priority_sorts_last() {
        let p = Process::new("P1", 0, 1);
        assert_eq!(p.priority_key(), i32::MAX);
    }

    #[test]
    fn test_table_aggregates() {
        let table = ProcessTable::from_tuples(&[("P1", 0, 5), ("P2", 4, 3), ("P3", 2, 8)]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.total_burst(), 16);
        assert_eq!(table.max_arrival(), 4);
        assert_eq!(table.get("P3").map(|p| p.burst), Some(8));
        assert!(table.get("P9").is_none());
    }

    #[test]
    fn test_table_preserves_input_order() {
        let table = ProcessTable::from_prioritized(&[("B", 1, 2, 3), ("A", 0, 1, 1)]);
        let ids: Vec<&str> = table.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
        assert_eq!(table.processes()[1].priority, Some(1));
    }

    #[test]
    fn test_empty_table() {
        let table = ProcessTable::default();
        assert!(table.is_empty());
        assert_eq!(table.total_burst(), 0);
        assert_eq!(table.max_arrival(), 0);
        assert_eq!(table.horizon(), Some(0));
    }

    #[test]
    fn test_horizon() {
        let table = ProcessTable::from_tuples(&[("P1", 4, 3), ("P2", 0, 2)]);
        assert_eq!(table.horizon(), Some(9));

        let late = ProcessTable::from_tuples(&[("P1", i64::MAX, 1)]);
        assert_eq!(late.horizon(), None);

        let heavy = ProcessTable::from_tuples(&[("P1", 0, i64::MAX), ("P2", 0, 1)]);
        assert_eq!(heavy.horizon(), None);
        assert_eq!(heavy.total_burst(), i64::MAX);
    }

    #[test]
    fn test_table_serde_transparent() {
        let table = ProcessTable::from_tuples(&[("P1", 0, 2)]);
        let json = serde_json::to_string(&table).unwrap();
        assert!(json.starts_with('['));
        let back: ProcessTable = serde_json::from_str(&json).unwrap();
        assert_eq!(back, table);
    }
}
