//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while computing a step response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Invalid argument provided to the solver.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    /// Malformed time grid.
    #[error("Invalid time grid: {what}")]
    InvalidGrid { what: &'static str },

    /// Model construction or realization failure.
    #[error(transparent)]
    Model(#[from] lti_model::ModelError),
}

pub type SimResult<T> = Result<T, SimError>;
