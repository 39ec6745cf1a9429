//! CPU scheduling simulation engine for the U-Engine ecosystem.
//!
//! Given a table of processes (arrival, burst, optional priority), computes
//! when each process completes under a classical single-CPU discipline and,
//! for the preemptive ones, which process held the CPU at every tick.
//! Rendering (tables, Gantt charts) is left to the caller.
//!
//! # Modules
//!
//! - **`models`**: `Process`, `ProcessTable`, `CompletionRecord`,
//!   `TimelineEvent`, `ScheduleResult`
//! - **`strategies`**: FCFS, SJF, SRTF, Round Robin, Priority (NP/P), HRRN
//! - **`metrics`**: Turnaround, waiting, utilization
//! - **`dispatcher`**: Discipline selection, validation and the `Simulator`
//! - **`validation`**: Input checks (empty table, duplicate IDs, bad bursts)
//! - **`generator`**: Random workloads
//!
//! # Determinism
//!
//! Every run is a pure function of its inputs: no I/O, no shared state.
//! Ties are broken by fixed scan orders documented per strategy.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatcher;
pub mod error;
pub mod generator;
pub mod metrics;
pub mod models;
pub mod strategies;
pub mod validation;

pub use dispatcher::{dispatch, Discipline, SimulationConfig, SimulationReport, Simulator};
pub use error::SimulationError;
