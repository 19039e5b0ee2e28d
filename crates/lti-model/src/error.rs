//! Error types for model construction and realization.

use thiserror::Error;

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised when building or realizing a transfer function.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// Malformed transfer function: empty polynomial, zero denominator,
    /// non-finite coefficients, or a numerator too long to realize.
    #[error("Invalid model: {what}")]
    InvalidModel { what: &'static str },

    /// A state-space realization cannot be formed from an otherwise
    /// well-formed transfer function.
    #[error("Singular system: {what}")]
    SingularSystem { what: &'static str },
}
