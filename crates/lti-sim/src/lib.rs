//! Step-response simulation for LTI transfer functions.
//!
//! This crate turns a validated [`lti_model::TransferFunction`] into an
//! ordered sequence of `(time, amplitude)` samples: the zero-state response
//! to a unit step applied at t = 0, evaluated on a caller-supplied
//! [`TimeGrid`].
//!
//! # Architecture
//!
//! - [`TimeGrid`] validates the sample times once, at the boundary
//! - [`Integrator`] implementations advance the state over one grid
//!   interval; the default is exact per-interval discretization via the
//!   matrix exponential, so accuracy does not depend on grid spacing
//! - [`step_response`] is a pure function: no retained state between
//!   calls, identical inputs give identical output
//! - [`step_response_batch`] runs independent systems in parallel; each
//!   computation owns its inputs and shares nothing
//!
//! Unstable and marginal systems are valid inputs, not errors: the solver
//! returns the true diverging amplitudes without clamping.

pub mod batch;
pub mod error;
pub mod grid;
pub mod integrator;
pub mod response;

pub use batch::step_response_batch;
pub use error::{SimError, SimResult};
pub use grid::TimeGrid;
pub use integrator::{ForwardEuler, Integrator, IntegratorType, MatrixExponential, Rk4};
pub use response::{ResponseSample, SolverOptions, step_response, step_response_with};
