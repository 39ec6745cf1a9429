//! Run configuration.

use serde::{Deserialize, Serialize};

use super::Discipline;
use crate::error::SimulationError;

/// Parameters of one simulation run, apart from the process table.
///
/// # Example
/// ```
/// use u_cpusched::dispatcher::{Discipline, SimulationConfig};
///
/// let config = SimulationConfig::new(Discipline::RoundRobin).with_quantum(2);
/// assert_eq!(config.quantum, Some(2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Discipline to simulate.
    pub discipline: Discipline,
    /// Time quantum in ticks. Read only by Round Robin.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantum: Option<i64>,
}

impl SimulationConfig {
    /// Creates a configuration without a quantum.
    pub fn new(discipline: Discipline) -> Self {
        Self {
            discipline,
            quantum: None,
        }
    }

    /// Creates a configuration from a discipline name.
    pub fn from_name(name: &str) -> Result<Self, SimulationError> {
        Ok(Self::new(name.parse()?))
    }

    /// Sets the time quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }
}
