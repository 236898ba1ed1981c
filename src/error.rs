//! Crate error type.

use thiserror::Error;

use crate::validation::ValidationError;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SchedulingError>;

/// Errors surfaced by simulation, aggregation, and configuration loading.
///
/// A validated, non-empty run never fails inside the simulation loop; every
/// variant here is raised before the loop starts or after it finishes.
#[derive(Debug, Error)]
pub enum SchedulingError {
    /// The input was rejected before simulation.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// Aggregates were requested over zero processes.
    #[error("cannot compute averages over an empty process set")]
    EmptyProcessSet,

    /// A simulation request could not be parsed.
    #[error("invalid simulation request: {0}")]
    Config(#[from] serde_json::Error),
}

impl SchedulingError {
    /// Validation errors carried by an `InvalidInput` rejection.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            _ => &[],
        }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
