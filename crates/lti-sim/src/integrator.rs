//! Per-interval integrators for the zero-state step response.
//!
//! The system under a held unit step is time-invariant, so an integrator
//! only needs to advance the state across one grid interval of width `h`:
//! `x' = A x + B`, input already folded in.

use lti_core::{Tolerances, nearly_equal};
use lti_model::StateSpaceModel;
use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Trait for step-response integrators.
pub trait Integrator {
    /// Advance the state across one grid interval of width `h > 0`.
    ///
    /// Takes `&mut self` so implementations may cache work that depends
    /// only on the interval width.
    fn step(&mut self, model: &StateSpaceModel, x: &DVector<f64>, h: f64) -> DVector<f64>;
}

/// Integrator selection for a solver run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IntegratorType {
    /// Exact per-interval discretization (default): accuracy independent
    /// of grid spacing, one matrix exponential per distinct interval width.
    #[default]
    MatrixExponential,
    /// Classical 4th-order Runge-Kutta with fixed substeps.
    Rk4,
    /// Forward Euler (1st-order, one derivative call per substep).
    ForwardEuler,
}

/// Discretized transition for one interval width.
#[derive(Clone, Debug)]
struct Discretized {
    h: f64,
    ad: DMatrix<f64>,
    bd: DVector<f64>,
}

impl Discretized {
    /// Exact zero-order-hold discretization via the augmented exponential
    ///
    /// ```text
    /// exp([[A, B], [0, 0]] * h) = [[Ad, Bd], [0, 1]]
    /// ```
    ///
    /// so `x(t + h) = Ad x(t) + Bd` under a held unit input.
    fn new(model: &StateSpaceModel, h: f64) -> Self {
        let n = model.order();
        let mut m = DMatrix::zeros(n + 1, n + 1);
        m.view_mut((0, 0), (n, n)).copy_from(model.a());
        m.view_mut((0, n), (n, 1)).copy_from(model.b());
        let e = (m * h).exp();
        let ad = e.view((0, 0), (n, n)).into_owned();
        let bd = e.column(n).rows(0, n).into_owned();
        Self { h, ad, bd }
    }
}

/// Exact matrix-exponential integrator.
///
/// Uniform grids hit the cache on every interval after the first, so the
/// whole response costs a single exponential.
#[derive(Clone, Debug, Default)]
pub struct MatrixExponential {
    cached: Option<Discretized>,
}

impl MatrixExponential {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Integrator for MatrixExponential {
    fn step(&mut self, model: &StateSpaceModel, x: &DVector<f64>, h: f64) -> DVector<f64> {
        // Interval widths on a uniform grid differ by rounding only;
        // a tolerance compare keeps the cache hot.
        let d = match self.cached.take() {
            Some(d) if nearly_equal(d.h, h, Tolerances::default()) => d,
            _ => {
                tracing::trace!(h, "discretizing interval");
                Discretized::new(model, h)
            }
        };
        let next = &d.ad * x + &d.bd;
        self.cached = Some(d);
        next
    }
}

/// Classical RK4 (Runge-Kutta 4th order) integrator.
///
/// Subdivides each grid interval so no substep exceeds `max_dt`.
#[derive(Clone, Debug)]
pub struct Rk4 {
    max_dt: f64,
}

impl Rk4 {
    pub fn new(max_dt: f64) -> SimResult<Self> {
        if !(max_dt > 0.0) {
            return Err(SimError::InvalidArg {
                what: "substep width must be positive",
            });
        }
        Ok(Self { max_dt })
    }
}

impl Integrator for Rk4 {
    fn step(&mut self, model: &StateSpaceModel, x: &DVector<f64>, h: f64) -> DVector<f64> {
        let substeps = (h / self.max_dt).ceil().max(1.0) as usize;
        let dt = h / substeps as f64;
        let mut x = x.clone();
        for _ in 0..substeps {
            let k1 = model.derivative(&x);
            let k2 = model.derivative(&(&x + &k1 * (0.5 * dt)));
            let k3 = model.derivative(&(&x + &k2 * (0.5 * dt)));
            let k4 = model.derivative(&(&x + &k3 * dt));

            // x_new = x + (dt/6) * (k1 + 2*k2 + 2*k3 + k4)
            x += (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0);
        }
        x
    }
}

/// Forward Euler (explicit, 1st order, mostly a test reference).
#[derive(Clone, Debug)]
pub struct ForwardEuler {
    max_dt: f64,
}

impl ForwardEuler {
    pub fn new(max_dt: f64) -> SimResult<Self> {
        if !(max_dt > 0.0) {
            return Err(SimError::InvalidArg {
                what: "substep width must be positive",
            });
        }
        Ok(Self { max_dt })
    }
}

impl Integrator for ForwardEuler {
    fn step(&mut self, model: &StateSpaceModel, x: &DVector<f64>, h: f64) -> DVector<f64> {
        let substeps = (h / self.max_dt).ceil().max(1.0) as usize;
        let dt = h / substeps as f64;
        let mut x = x.clone();
        for _ in 0..substeps {
            x += model.derivative(&x) * dt;
        }
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lti_model::TransferFunction;

    fn first_order_lag() -> StateSpaceModel {
        let tf = TransferFunction::new(vec![1.0], vec![1.0, 1.0]).unwrap();
        StateSpaceModel::from_transfer_function(&tf).unwrap()
    }

    #[test]
    fn exact_step_matches_analytic() {
        // 1/(s+1): x(h) = 1 - e^(-h) from zero state
        let model = first_order_lag();
        let mut integ = MatrixExponential::new();
        let x0 = DVector::zeros(1);
        let x1 = integ.step(&model, &x0, 0.5);
        let expected = 1.0 - (-0.5_f64).exp();
        assert!((x1[0] - expected).abs() < 1e-12);
    }

    #[test]
    fn exact_step_reuses_discretization() {
        let model = first_order_lag();
        let mut integ = MatrixExponential::new();
        let x0 = DVector::zeros(1);
        let a = integ.step(&model, &x0, 0.25);
        let b = integ.step(&model, &a, 0.25);
        // two equal steps of h equal one step of 2h
        let mut fresh = MatrixExponential::new();
        let c = fresh.step(&model, &x0, 0.5);
        assert!((b[0] - c[0]).abs() < 1e-12);
    }

    #[test]
    fn rk4_converges_to_exact() {
        let model = first_order_lag();
        let mut exact = MatrixExponential::new();
        let mut rk4 = Rk4::new(1e-3).unwrap();
        let x0 = DVector::zeros(1);
        let a = exact.step(&model, &x0, 1.0);
        let b = rk4.step(&model, &x0, 1.0);
        assert!((a[0] - b[0]).abs() < 1e-9);
    }

    #[test]
    fn euler_is_first_order() {
        let model = first_order_lag();
        let mut exact = MatrixExponential::new();
        let mut euler = ForwardEuler::new(1e-4).unwrap();
        let x0 = DVector::zeros(1);
        let a = exact.step(&model, &x0, 1.0);
        let b = euler.step(&model, &x0, 1.0);
        assert!((a[0] - b[0]).abs() < 1e-3);
    }

    #[test]
    fn invalid_substep_rejected() {
        assert!(Rk4::new(0.0).is_err());
        assert!(ForwardEuler::new(-1.0).is_err());
        assert!(Rk4::new(f64::NAN).is_err());
    }
}
