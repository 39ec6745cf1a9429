//! Schedule result model.
//!
//! A schedule result holds one completion record per process, in the
//! order the processes finished, plus the per-tick execution timeline
//! for the preemptive and quantized disciplines.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::ProcessTable;

/// Outcome of a single simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    /// Completion records in completion order.
    pub records: Vec<CompletionRecord>,
    /// Per-tick CPU occupancy. Empty for non-preemptive disciplines.
    pub timeline: Vec<TimelineEvent>,
}

/// Completion of one process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRecord {
    /// Process ID.
    pub process_id: String,
    /// Arrival tick (copied from the process).
    pub arrival: i64,
    /// Burst ticks (copied from the process).
    pub burst: i64,
    /// Tick at which the last unit of work finished.
    pub completion: i64,
    /// Priority (copied from the process, if any).
    pub priority: Option<i32>,
}

/// The CPU was occupied by `process_id` during `[tick, tick + 1)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Tick index.
    pub tick: i64,
    /// Running process.
    pub process_id: String,
}

/// A contiguous run of one process on the CPU: `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSegment {
    /// Running process.
    pub process_id: String,
    /// First tick (inclusive).
    pub start: i64,
    /// End tick (exclusive).
    pub end: i64,
}

/// A broken schedule invariant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Related process ID, or the tick for timeline conflicts.
    pub entity_id: String,
    /// Human-readable description.
    pub message: String,
}

/// Classification of schedule invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// A process has no completion record.
    MissingRecord,
    /// A process has more than one completion record.
    DuplicateRecord,
    /// Completion earlier than arrival + burst.
    EarlyCompletion,
    /// Timeline ticks for a process differ from its burst.
    WorkMismatch,
    /// Two events share a tick.
    DoubleBooked,
    /// A process runs before it arrives.
    RunBeforeArrival,
}

impl CompletionRecord {
    /// Turnaround time: completion − arrival.
    #[inline]
    pub fn turnaround(&self) -> i64 {
        self.completion - self.arrival
    }

    /// Waiting time: turnaround − burst.
    #[inline]
    pub fn waiting(&self) -> i64 {
        self.turnaround() - self.burst
    }
}

impl TimelineEvent {
    /// Creates a timeline event.
    pub fn new(tick: i64, process_id: impl Into<String>) -> Self {
        Self {
            tick,
            process_id: process_id.into(),
        }
    }
}

impl ExecutionSegment {
    /// Segment length in ticks.
    #[inline]
    pub fn len(&self) -> i64 {
        self.end - self.start
    }

    /// Whether the segment covers no ticks.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

impl Violation {
    fn new(
        violation_type: ViolationType,
        entity_id: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            violation_type,
            entity_id: entity_id.into(),
            message: message.into(),
        }
    }
}

impl ScheduleResult {
    /// Creates a result with a timeline.
    pub fn new(records: Vec<CompletionRecord>, timeline: Vec<TimelineEvent>) -> Self {
        Self { records, timeline }
    }

    /// Creates a result without a timeline.
    pub fn without_timeline(records: Vec<CompletionRecord>) -> Self {
        Self {
            records,
            timeline: Vec::new(),
        }
    }

    /// Whether a per-tick timeline was produced.
    pub fn has_timeline(&self) -> bool {
        !self.timeline.is_empty()
    }

    /// Completion record for a process.
    pub fn record(&self, process_id: &str) -> Option<&CompletionRecord> {
        self.records.iter().find(|r| r.process_id == process_id)
    }

    /// Completion tick for a process.
    pub fn completion_of(&self, process_id: &str) -> Option<i64> {
        self.record(process_id).map(|r| r.completion)
    }

    /// Process IDs in completion order.
    pub fn completion_order(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.process_id.as_str()).collect()
    }

    /// Latest completion tick (0 if empty).
    pub fn makespan(&self) -> i64 {
        self.records.iter().map(|r| r.completion).max().unwrap_or(0)
    }

    /// Number of CPU-busy ticks in the timeline.
    pub fn busy_ticks(&self) -> usize {
        self.timeline.len()
    }

    /// Contiguous CPU occupancy, ordered by start tick.
    ///
    /// Built from the timeline when there is one; otherwise each record
    /// occupies `[completion − burst, completion)`, which holds for every
    /// run-to-completion discipline.
    pub fn segments(&self) -> Vec<ExecutionSegment> {
        if self.has_timeline() {
            let mut segments: Vec<ExecutionSegment> = Vec::new();
            for event in &self.timeline {
                if let Some(last) = segments.last_mut() {
                    if last.process_id == event.process_id && last.end == event.tick {
                        last.end += 1;
                        continue;
                    }
                }
                segments.push(ExecutionSegment {
                    process_id: event.process_id.clone(),
                    start: event.tick,
                    end: event.tick + 1,
                });
            }
            segments
        } else {
            let mut segments: Vec<ExecutionSegment> = self
                .records
                .iter()
                .map(|r| ExecutionSegment {
                    process_id: r.process_id.clone(),
                    start: r.completion - r.burst,
                    end: r.completion,
                })
                .collect();
            segments.sort_by_key(|s| s.start);
            segments
        }
    }

    /// Checks the result against the table it was computed from.
    ///
    /// Returns every violation found; an empty vector means the schedule
    /// is consistent: one record per process, no early completion, and,
    /// when a timeline exists, work conservation, no double booking and
    /// no execution before arrival.
    pub fn violations(&self, table: &ProcessTable) -> Vec<Violation> {
        let mut violations = Vec::new();

        let mut record_counts: HashMap<&str, usize> = HashMap::new();
        for r in &self.records {
            *record_counts.entry(r.process_id.as_str()).or_insert(0) += 1;
            if r.completion < r.arrival.saturating_add(r.burst) {
                violations.push(Violation::new(
                    ViolationType::EarlyCompletion,
                    &r.process_id,
                    format!(
                        "Process '{}' completes at {} before arrival {} + burst {}",
                        r.process_id, r.completion, r.arrival, r.burst
                    ),
                ));
            }
        }

        for p in table {
            match record_counts.get(p.id.as_str()).copied().unwrap_or(0) {
                0 => violations.push(Violation::new(
                    ViolationType::MissingRecord,
                    &p.id,
                    format!("Process '{}' has no completion record", p.id),
                )),
                1 => {}
                n => violations.push(Violation::new(
                    ViolationType::DuplicateRecord,
                    &p.id,
                    format!("Process '{}' has {n} completion records", p.id),
                )),
            }
        }

        if !self.has_timeline() {
            return violations;
        }

        let mut seen_ticks = HashSet::new();
        let mut work: HashMap<&str, i64> = HashMap::new();
        for event in &self.timeline {
            if !seen_ticks.insert(event.tick) {
                violations.push(Violation::new(
                    ViolationType::DoubleBooked,
                    event.tick.to_string(),
                    format!("Tick {} is assigned more than once", event.tick),
                ));
            }
            *work.entry(event.process_id.as_str()).or_insert(0) += 1;
            if let Some(p) = table.get(&event.process_id) {
                if event.tick < p.arrival {
                    violations.push(Violation::new(
                        ViolationType::RunBeforeArrival,
                        &p.id,
                        format!(
                            "Process '{}' runs at tick {} before arrival {}",
                            p.id, event.tick, p.arrival
                        ),
                    ));
                }
            }
        }

        for p in table {
            let ran = work.get(p.id.as_str()).copied().unwrap_or(0);
            if ran != p.burst {
                violations.push(Violation::new(
                    ViolationType::WorkMismatch,
                    &p.id,
                    format!("Process '{}' ran {ran} ticks, burst is {}", p.id, p.burst),
                ));
            }
        }

        violations
    }
}
