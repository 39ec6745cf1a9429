//! Input validation for simulation runs.
//!
//! Checks the process table and run parameters before any strategy is
//! invoked. Detects:
//! - Empty tables
//! - Duplicate process IDs
//! - Negative arrivals and non-positive bursts
//! - Tables whose last possible tick does not fit in an `i64`
//! - Missing or non-positive priorities (priority disciplines only)
//! - Missing or non-positive quantum (Round Robin only)
//!
//! All problems are collected; the caller gets the full list at once.

use crate::dispatcher::Discipline;
use crate::models::ProcessTable;
use std::collections::HashSet;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// The table has no processes.
    EmptyTable,
    /// Two processes share the same ID.
    DuplicateId,
    /// Arrival tick is below zero.
    NegativeArrival,
    /// Burst is zero or negative.
    NonPositiveBurst,
    /// `max_arrival + total_burst` overflows the tick range.
    TimeOverflow,
    /// A priority discipline was selected but a process has no priority.
    MissingPriority,
    /// Priority is zero or negative.
    NonPositivePriority,
    /// Round Robin was selected without a quantum.
    MissingQuantum,
    /// Quantum is zero or negative.
    NonPositiveQuantum,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

pub(crate) fn time_overflow(table: &ProcessTable) -> ValidationError {
    ValidationError::new(
        ValidationErrorKind::TimeOverflow,
        format!(
            "Latest arrival {} plus total burst {} exceeds the tick range",
            table.max_arrival(),
            table.total_burst()
        ),
    )
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates a process table independent of the discipline.
///
/// Checks:
/// 1. At least one process
/// 2. No duplicate process IDs
/// 3. `arrival >= 0`
/// 4. `burst >= 1`
/// 5. `max_arrival + total_burst` fits in an `i64`
pub fn validate_table(table: &ProcessTable) -> ValidationResult {
    let mut errors = Vec::new();
    check_table(table, &mut errors);
    finish(errors)
}

/// Validates a table together with the discipline and quantum it will
/// be run with.
///
/// In addition to [`validate_table`]:
/// 6. Priority disciplines need `priority >= 1` on every process
/// 7. Disciplines that slice by quantum need `quantum >= 1`
///
/// A quantum passed to any other discipline is ignored.
pub fn validate_input(
    table: &ProcessTable,
    discipline: Discipline,
    quantum: Option<i64>,
) -> ValidationResult {
    let mut errors = Vec::new();
    check_table(table, &mut errors);

    if discipline.uses_priority() {
        for p in table {
            match p.priority {
                None => errors.push(ValidationError::new(
                    ValidationErrorKind::MissingPriority,
                    format!("Process '{}' has no priority for {}", p.id, discipline),
                )),
                Some(pr) if pr < 1 => errors.push(ValidationError::new(
                    ValidationErrorKind::NonPositivePriority,
                    format!("Process '{}' has non-positive priority {pr}", p.id),
                )),
                Some(_) => {}
            }
        }
    }

    if discipline.requires_quantum() {
        match quantum {
            None => errors.push(ValidationError::new(
                ValidationErrorKind::MissingQuantum,
                format!("{} requires a time quantum", discipline.label()),
            )),
            Some(q) if q < 1 => errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveQuantum,
                format!("Time quantum must be at least 1, got {q}"),
            )),
            Some(_) => {}
        }
    }

    finish(errors)
}

fn check_table(table: &ProcessTable, errors: &mut Vec<ValidationError>) {
    if table.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyTable,
            "Process table is empty",
        ));
        return;
    }

    let mut ids = HashSet::new();
    for p in table {
        if !ids.insert(p.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }
        if p.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("Process '{}' has negative arrival {}", p.id, p.arrival),
            ));
        }
        if p.burst < 1 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("Process '{}' has non-positive burst {}", p.id, p.burst),
            ));
        }
    }

    if table.horizon().is_none() {
        errors.push(time_overflow(table));
    }
}

fn finish(errors: Vec<ValidationError>) -> ValidationResult {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
