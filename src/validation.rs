//! Input validation for simulation runs.
//!
//! Checks the process table and run parameters before simulating. Detects:
//! - Too many processes
//! - Duplicate or zero IDs
//! - Negative arrivals and non-positive bursts
//! - Out-of-range priorities (priority-based policies only)
//! - Missing or non-positive round-robin quantum
//! - Missing or negative I/O fields (I/O policy only)
//! - NaN or infinite times
//!
//! Every issue is reported; nothing is corrected.

use std::collections::HashSet;

use thiserror::Error;

use crate::dispatching::Policy;
use crate::models::{Process, Time, MAX_PRIORITY, MIN_PRIORITY, TIME_EPSILON};

/// Largest process table accepted by the simulator.
pub const MAX_PROCESSES: usize = 100;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// More than [`MAX_PROCESSES`] processes.
    TooManyProcesses,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process ID is zero.
    InvalidId,
    /// Arrival time below zero.
    NegativeArrival,
    /// First burst not greater than zero.
    NonPositiveBurst,
    /// Priority outside `1..=100` under a priority-based policy.
    PriorityOutOfRange,
    /// Round robin without a quantum above [`TIME_EPSILON`].
    InvalidQuantum,
    /// I/O policy process without `io_time` or `burst_time2`.
    MissingIoFields,
    /// Negative I/O wait or second burst.
    NegativeIoField,
    /// A time field is NaN or infinite.
    NonFiniteValue,
    /// I/O policy tick not greater than zero.
    InvalidIoTick,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the input of a simulation run.
///
/// Checks:
/// 1. At most [`MAX_PROCESSES`] processes
/// 2. IDs are non-zero and unique
/// 3. All times are finite
/// 4. Arrival ≥ 0 and burst > 0
/// 5. Priority in `1..=100` when `policy` reads priorities
/// 6. A quantum above [`TIME_EPSILON`] when `policy` is round robin
/// 7. Present, non-negative `io_time` and `burst_time2` when `policy` is the I/O policy
///
/// An empty process list is valid; it simulates to an empty timeline.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[Process], policy: Policy, quantum: Option<Time>) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.len() > MAX_PROCESSES {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooManyProcesses,
            format!(
                "Maximum {MAX_PROCESSES} processes are allowed, got {}",
                processes.len()
            ),
        ));
    }

    if policy.requires_quantum() {
        match quantum {
            Some(q) if q.is_finite() && q > TIME_EPSILON => {}
            Some(q) => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                format!("Time quantum must be greater than 0, got {q}"),
            )),
            None => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                "Time quantum is required for round robin",
            )),
        }
    }

    let mut ids = HashSet::new();
    for p in processes {
        if p.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidId,
                "Process ID must be positive",
            ));
        } else if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: P{}", p.id),
            ));
        }

        check_times(p, policy, &mut errors);

        if policy.uses_priority() && !(MIN_PRIORITY..=MAX_PRIORITY).contains(&p.priority) {
            errors.push(ValidationError::new(
                ValidationErrorKind::PriorityOutOfRange,
                format!(
                    "P{}: priority must be between {MIN_PRIORITY} and {MAX_PRIORITY}, got {}",
                    p.id, p.priority
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_times(p: &Process, policy: Policy, errors: &mut Vec<ValidationError>) {
    let mut fields = vec![("arrival time", p.arrival_time), ("burst time", p.burst_time)];
    if policy.is_two_phase() {
        fields.extend(p.io_time.map(|t| ("I/O time", t)));
        fields.extend(p.burst_time2.map(|t| ("second burst time", t)));
    }

    let mut finite = true;
    for (name, value) in &fields {
        if !value.is_finite() {
            finite = false;
            errors.push(ValidationError::new(
                ValidationErrorKind::NonFiniteValue,
                format!("P{}: {name} must be a finite number", p.id),
            ));
        }
    }
    if !finite {
        return;
    }

    if p.arrival_time < 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NegativeArrival,
            format!("P{}: arrival time cannot be negative", p.id),
        ));
    }
    if p.burst_time <= 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveBurst,
            format!("P{}: burst time must be greater than 0", p.id),
        ));
    }

    if !policy.is_two_phase() {
        return;
    }
    match (p.io_time, p.burst_time2) {
        (Some(io), Some(burst2)) => {
            if io < 0.0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NegativeIoField,
                    format!("P{}: I/O time cannot be negative", p.id),
                ));
            }
            if burst2 < 0.0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NegativeIoField,
                    format!("P{}: second burst time cannot be negative", p.id),
                ));
            }
        }
        _ => errors.push(ValidationError::new(
            ValidationErrorKind::MissingIoFields,
            format!("P{}: I/O time and second burst time are required", p.id),
        )),
    }
}
