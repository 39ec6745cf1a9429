//! Simulation errors.
//!
//! Every failure is terminal for the run: there is no partial result
//! and nothing is retried, since the computation is deterministic.

use crate::validation::ValidationError;

/// Error returned by a simulation run.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The process table or run parameters were rejected before the run.
    InvalidInput(Vec<ValidationError>),
    /// The discipline name did not match any known discipline.
    UnknownDiscipline(String),
    /// A time loop passed its upper bound. Indicates an internal bug;
    /// validated input never reaches it.
    NonTerminating {
        /// Discipline that overran.
        discipline: &'static str,
        /// Tick bound that was exceeded.
        limit: i64,
    },
}

impl SimulationError {
    /// Validation errors, if this is an input error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            _ => &[],
        }
    }
}

impl std::fmt::Display for SimulationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(errors) => {
                write!(f, "invalid input")?;
                for (i, e) in errors.iter().enumerate() {
                    let sep = if i == 0 { ": " } else { "; " };
                    write!(f, "{sep}{e}")?;
                }
                Ok(())
            }
            Self::UnknownDiscipline(name) => write!(f, "unknown scheduling discipline '{name}'"),
            Self::NonTerminating { discipline, limit } => write!(
                f,
                "{discipline} simulation exceeded its tick bound of {limit}"
            ),
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}
