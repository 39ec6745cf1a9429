//! Discipline selection and simulation entry point.
//!
//! Maps a discipline identifier (plus a quantum for Round Robin) to a
//! strategy, validates the input, runs it, and derives metrics.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatcher::{Discipline, Simulator};
//! use u_cpusched::models::ProcessTable;
//!
//! let table = ProcessTable::from_tuples(&[("P1", 0, 5), ("P2", 1, 3), ("P3", 2, 8)]);
//! let report = Simulator::new(Discipline::Fcfs).simulate(&table).unwrap();
//! assert_eq!(report.result.completion_of("P3"), Some(16));
//! ```

mod config;
mod simulator;

pub use config::SimulationConfig;
pub use simulator::{dispatch, SimulationReport, Simulator};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SimulationError;
use crate::strategies::{
    Fcfs, Hrrn, PriorityNonPreemptive, PriorityPreemptive, RoundRobin, SchedulingStrategy, Sjf,
    Srtf,
};
use crate::validation::{ValidationError, ValidationErrorKind};

/// The closed set of supported scheduling disciplines.
///
/// Serialized as its short name (`"FCFS"`, `"SJF-NP"`, ...). Parsing
/// also accepts the long labels (`"SJF (Non-Preemptive)"`, `"Round Robin"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Discipline {
    /// First-Come-First-Served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    #[serde(rename = "SJF-NP", alias = "SJF (Non-Preemptive)")]
    Sjf,
    /// Shortest-Remaining-Time-First.
    #[serde(rename = "SRTF", alias = "SRTF (Preemptive)")]
    Srtf,
    /// Round Robin (needs a quantum).
    #[serde(rename = "RR", alias = "Round Robin")]
    RoundRobin,
    /// Priority, non-preemptive.
    #[serde(rename = "PRIORITY-NP", alias = "Priority (Non-Preemptive)")]
    PriorityNonPreemptive,
    /// Priority, preemptive.
    #[serde(rename = "PRIORITY-P", alias = "Priority (Preemptive)")]
    PriorityPreemptive,
    /// Highest-Response-Ratio-Next.
    #[serde(rename = "HRRN")]
    Hrrn,
}

impl Discipline {
    /// All disciplines, in presentation order.
    pub const ALL: [Discipline; 7] = [
        Discipline::Fcfs,
        Discipline::Sjf,
        Discipline::Srtf,
        Discipline::RoundRobin,
        Discipline::PriorityNonPreemptive,
        Discipline::PriorityPreemptive,
        Discipline::Hrrn,
    ];

    /// Short name (e.g., "SJF-NP").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF-NP",
            Self::Srtf => "SRTF",
            Self::RoundRobin => "RR",
            Self::PriorityNonPreemptive => "PRIORITY-NP",
            Self::PriorityPreemptive => "PRIORITY-P",
            Self::Hrrn => "HRRN",
        }
    }

    /// Long label (e.g., "SJF (Non-Preemptive)").
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF (Non-Preemptive)",
            Self::Srtf => "SRTF (Preemptive)",
            Self::RoundRobin => "Round Robin",
            Self::PriorityNonPreemptive => "Priority (Non-Preemptive)",
            Self::PriorityPreemptive => "Priority (Preemptive)",
            Self::Hrrn => "HRRN",
        }
    }

    /// Whether a running process can lose the CPU before it finishes.
    pub fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Self::Srtf | Self::RoundRobin | Self::PriorityPreemptive
        )
    }

    /// Whether the result carries a per-tick timeline.
    pub fn produces_timeline(&self) -> bool {
        self.is_preemptive()
    }

    /// Whether process priorities are read.
    pub fn uses_priority(&self) -> bool {
        matches!(
            self,
            Self::PriorityNonPreemptive | Self::PriorityPreemptive
        )
    }

    /// Whether a time quantum is required.
    pub fn requires_quantum(&self) -> bool {
        matches!(self, Self::RoundRobin)
    }

    /// Builds the strategy for this discipline.
    ///
    /// The quantum is only read for Round Robin, where it must be present.
    pub fn strategy(
        &self,
        quantum: Option<i64>,
    ) -> Result<Box<dyn SchedulingStrategy>, SimulationError> {
        Ok(match self {
            Self::Fcfs => Box::new(Fcfs),
            Self::Sjf => Box::new(Sjf),
            Self::Srtf => Box::new(Srtf),
            Self::RoundRobin => {
                let quantum = quantum.ok_or_else(|| {
                    SimulationError::InvalidInput(vec![ValidationError::new(
                        ValidationErrorKind::MissingQuantum,
                        "Round Robin requires a time quantum",
                    )])
                })?;
                Box::new(RoundRobin::new(quantum))
            }
            Self::PriorityNonPreemptive => Box::new(PriorityNonPreemptive),
            Self::PriorityPreemptive => Box::new(PriorityPreemptive),
            Self::Hrrn => Box::new(Hrrn),
        })
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Discipline {
    type Err = SimulationError;

    /// Case-insensitive; `_` and `-` are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_uppercase().replace('_', "-");
        let discipline = match key.as_str() {
            "FCFS" | "FIFO" => Self::Fcfs,
            "SJF" | "SJF-NP" | "SJF (NON-PREEMPTIVE)" => Self::Sjf,
            "SRTF" | "SRTF (PREEMPTIVE)" => Self::Srtf,
            "RR" | "ROUND-ROBIN" | "ROUND ROBIN" => Self::RoundRobin,
            "PRIORITY-NP" | "PRIORITY (NON-PREEMPTIVE)" => Self::PriorityNonPreemptive,
            "PRIORITY-P" | "PRIORITY (PREEMPTIVE)" => Self::PriorityPreemptive,
            "HRRN" => Self::Hrrn,
            _ => return Err(SimulationError::UnknownDiscipline(s.to_string())),
        };
        Ok(discipline)
    }
}
