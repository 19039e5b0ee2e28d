//! Transfer-function models and their state-space realizations.
//!
//! This crate is the model layer of the LTI step-response engine. It owns
//! the validated representation of a rational transfer function in the
//! Laplace variable and the conversion to controllable canonical form:
//!
//! - [`Polynomial`]: real coefficients, highest power first
//! - [`TransferFunction`]: validated numerator/denominator pair
//! - [`StateSpaceModel`]: ephemeral (A, B, C, D) realization consumed by
//!   the simulation layer
//!
//! # Design Principles
//!
//! - **Validated construction**: malformed coefficient sets are rejected at
//!   the boundary with a typed error, never passed on to numeric routines
//! - **Immutability**: a `TransferFunction` cannot change after construction
//! - **No simulation state**: realization is a pure derivation; integrating
//!   the response lives in `lti-sim`

pub mod error;
pub mod poly;
pub mod state_space;
pub mod tf;

pub use error::{ModelError, ModelResult};
pub use poly::Polynomial;
pub use state_space::StateSpaceModel;
pub use tf::TransferFunction;
