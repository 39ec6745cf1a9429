//! Simulation runner.
//!
//! # Flow
//! 1. Validate the table against the discipline and quantum.
//! 2. Build the strategy for the discipline.
//! 3. Run it.
//! 4. Derive metrics (`simulate` only).

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{Discipline, SimulationConfig};
use crate::error::SimulationError;
use crate::metrics::ScheduleMetrics;
use crate::models::{ProcessTable, ScheduleResult};
use crate::validation::validate_input;

/// Schedule result together with its derived metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Discipline that produced the result.
    pub discipline: Discipline,
    /// Long-form name of the strategy that ran (e.g. "Round Robin").
    #[serde(default)]
    pub strategy: String,
    /// Quantum used (Round Robin only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<i64>,
    /// Completion records and timeline.
    pub result: ScheduleResult,
    /// Turnaround, waiting and utilization figures.
    pub metrics: ScheduleMetrics,
}

/// Validates and runs one discipline over a process table.
///
/// The same simulator can be reused for any number of tables; each run
/// is independent.
///
/// # Example
/// ```
/// use u_cpusched::dispatcher::{Discipline, Simulator};
/// use u_cpusched::models::ProcessTable;
///
/// let table = ProcessTable::from_tuples(&[("P1", 0, 5), ("P2", 0, 3)]);
/// let result = Simulator::new(Discipline::RoundRobin)
///     .with_quantum(2)
///     .run(&table)
///     .unwrap();
/// assert_eq!(result.busy_ticks(), 8);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulator {
    config: SimulationConfig,
}

impl Simulator {
    /// Creates a simulator for a discipline.
    pub fn new(discipline: Discipline) -> Self {
        Self {
            config: SimulationConfig::new(discipline),
        }
    }

    /// Creates a simulator from a configuration.
    pub fn from_config(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Creates a simulator from a discipline name.
    ///
    /// Fails with [`SimulationError::UnknownDiscipline`] for names that
    /// match no discipline.
    pub fn from_name(name: &str) -> Result<Self, SimulationError> {
        SimulationConfig::from_name(name).map(Self::from_config)
    }

    /// Sets the time quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.config.quantum = Some(quantum);
        self
    }

    /// Run configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Validates the table and runs the discipline.
    pub fn run(&self, table: &ProcessTable) -> Result<ScheduleResult, SimulationError> {
        self.execute(table).map(|(result, _)| result)
    }

    /// Runs the discipline and derives metrics.
    pub fn simulate(&self, table: &ProcessTable) -> Result<SimulationReport, SimulationError> {
        let (result, strategy) = self.execute(table)?;
        let metrics = ScheduleMetrics::calculate(&result);
        Ok(SimulationReport {
            discipline: self.config.discipline,
            strategy: strategy.to_string(),
            quantum: self.config.quantum,
            result,
            metrics,
        })
    }

    fn execute(
        &self,
        table: &ProcessTable,
    ) -> Result<(ScheduleResult, &'static str), SimulationError> {
        let SimulationConfig {
            discipline,
            quantum,
        } = self.config;

        if let Err(errors) = validate_input(table, discipline, quantum) {
            warn!(%discipline, errors = errors.len(), "rejected simulation input");
            return Err(SimulationError::InvalidInput(errors));
        }

        let strategy = discipline.strategy(quantum)?;
        let description = strategy.description();
        info!(
            %discipline,
            strategy = description,
            processes = table.len(),
            ?quantum,
            "starting simulation"
        );
        let result = strategy.run(table)?;
        info!(
            %discipline,
            makespan = result.makespan(),
            busy_ticks = result.busy_ticks(),
            "simulation finished"
        );
        Ok((result, description))
    }
}

/// Runs `discipline` over `table`; `quantum` is read only by Round Robin.
pub fn dispatch(
    discipline: Discipline,
    table: &ProcessTable,
    quantum: Option<i64>,
) -> Result<ScheduleResult, SimulationError> {
    let mut simulator = Simulator::new(discipline);
    simulator.config.quantum = quantum;
    simulator.run(table)
}
