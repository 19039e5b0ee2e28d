//! Controllable canonical state-space realization.
//!
//! A transfer function of order `n` is realized in phase-variable form:
//!
//! ```text
//! x' = A x + B u        A: n x n companion, B = e_n
//! y  = C x + D u        C from the numerator, D the direct feedthrough
//! ```
//!
//! The realization is ephemeral: derived for one response computation and
//! dropped afterwards, never shared or persisted.

use nalgebra::{DMatrix, DVector, RowDVector};

use crate::error::{ModelError, ModelResult};
use crate::tf::TransferFunction;

/// Single-input single-output state-space model `(A, B, C, D)`.
#[derive(Clone, Debug, PartialEq)]
pub struct StateSpaceModel {
    a: DMatrix<f64>,
    b: DVector<f64>,
    c: RowDVector<f64>,
    d: f64,
}

impl StateSpaceModel {
    /// Realize a transfer function in controllable canonical form.
    ///
    /// The denominator is normalized to monic form first. A numerator of
    /// equal degree is split into a direct feedthrough `D` (ratio of
    /// leading coefficients) plus a strictly proper remainder, so systems
    /// with equal numerator and denominator order realize cleanly.
    ///
    /// # Errors
    ///
    /// - `SingularSystem` if the leading denominator coefficient is zero:
    ///   the stated order does not match the actual degree and the
    ///   companion matrix cannot be formed. Callers must reduce the
    ///   coefficient sequence instead.
    /// - `InvalidModel` if the numerator is longer than the denominator;
    ///   such improper systems have no proper state-space form.
    pub fn from_transfer_function(tf: &TransferFunction) -> ModelResult<Self> {
        let num = tf.numerator().coeffs();
        let den = tf.denominator().coeffs();
        let n = tf.order();

        let lead = den[0];
        if lead == 0.0 {
            return Err(ModelError::SingularSystem {
                what: "leading denominator coefficient is zero",
            });
        }
        if num.len() > n + 1 {
            return Err(ModelError::InvalidModel {
                what: "numerator degree exceeds denominator degree",
            });
        }

        // Monic denominator tail a_1..a_n and left-padded numerator b_0..b_n.
        let a_tail: Vec<f64> = den[1..].iter().map(|c| c / lead).collect();
        let mut b_pad = vec![0.0; n + 1 - num.len()];
        b_pad.extend(num.iter().map(|c| c / lead));

        // Equal-degree numerator feeds through directly; the remainder
        // b_i - d * a_i is what the states see.
        let d = b_pad[0];

        let mut a = DMatrix::zeros(n, n);
        for i in 0..n.saturating_sub(1) {
            a[(i, i + 1)] = 1.0;
        }
        for j in 0..n {
            a[(n - 1, j)] = -a_tail[n - 1 - j];
        }

        let mut b = DVector::zeros(n);
        if n > 0 {
            b[n - 1] = 1.0;
        }

        let mut c = RowDVector::zeros(n);
        for j in 0..n {
            c[j] = b_pad[n - j] - d * a_tail[n - 1 - j];
        }

        Ok(Self { a, b, c, d })
    }

    /// Number of states.
    pub fn order(&self) -> usize {
        self.a.nrows()
    }

    /// System matrix A.
    pub fn a(&self) -> &DMatrix<f64> {
        &self.a
    }

    /// Input vector B.
    pub fn b(&self) -> &DVector<f64> {
        &self.b
    }

    /// Output row C.
    pub fn c(&self) -> &RowDVector<f64> {
        &self.c
    }

    /// Direct feedthrough D.
    pub fn d(&self) -> f64 {
        self.d
    }

    /// State derivative `A x + B` under a held unit input.
    pub fn derivative(&self, x: &DVector<f64>) -> DVector<f64> {
        &self.a * x + &self.b
    }

    /// Output `C x + D` under a held unit input.
    pub fn output(&self, x: &DVector<f64>) -> f64 {
        (&self.c * x)[(0, 0)] + self.d
    }

    /// Settled step-response value `-C A^-1 B + D`.
    ///
    /// `None` when A is singular (a pole at the origin): the response has
    /// no finite final value.
    pub fn final_value(&self) -> Option<f64> {
        let z = self.a.clone().lu().solve(&(-&self.b))?;
        Some((&self.c * z)[(0, 0)] + self.d)
    }
}
